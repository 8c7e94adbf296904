//! panelkit - headless driver for the panelkit_ui widgets
//!
//! Loads a JSON configuration describing a combo box and a script of presses,
//! replays the script against a recording renderer and reports every frame.

pub mod config;
pub mod session;

pub use config::{AppConfig, ConfigError, LogLevel, CONFIG_VERSION};
pub use session::{FrameReport, Session, SessionEvent};
