pub mod player;
pub mod popup;
pub mod sidebar;
pub mod spinner;
