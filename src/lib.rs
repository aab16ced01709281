pub mod config;
pub mod event;
pub mod http;
pub mod model;
pub mod ops;
pub mod store;
pub mod ui;
pub mod util;
