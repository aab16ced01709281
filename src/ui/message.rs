#[derive(Debug, Clone)]
pub enum AppMessage {
    // User Input
    Quit,
    TogglePlayPause,

    // Navigation
    GoBack,
    NextSidebarItem,
    PreviousSidebarItem,
    SetSidebarIndex(usize),

    // Overlays
    OpenCreatePlaylist,
    OpenAddToPlaylist,
    DismissNotification,
}
