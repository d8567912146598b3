pub mod config;
pub mod logging;
pub mod model;

#[cfg(feature = "tui")]
pub mod tui;
