//! Configuration file support for the demo driver.
//!
//! The configuration describes one combo box (placement, style, items) and
//! a script of presses to replay against it, plus the log verbosity.

use std::path::Path;

use panelkit_ui::{Color, ComboBox, ComboBoxStyle, Point, Rect, StyleError, Widget};
use serde::{Deserialize, Serialize};

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting for the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub text: String,
    pub value: i32,
}

impl ItemConfig {
    pub fn new(text: &str, value: i32) -> Self {
        Self {
            text: text.to_string(),
            value,
        }
    }
}

/// Driver configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Caption drawn above the combo box
    #[serde(default = "default_label")]
    pub label: String,

    /// Placement; the height is the collapsed height
    #[serde(default = "default_rect")]
    pub rect: Rect,

    #[serde(default)]
    pub style: ComboBoxStyle,

    /// Screen color used to erase the area a closing list leaves behind
    #[serde(default)]
    pub screen_background: Color,

    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,

    /// Item to select after the list is filled
    #[serde(default)]
    pub initial_selection: Option<usize>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Presses to replay, in display coordinates
    #[serde(default)]
    pub presses: Vec<Point>,
}

fn default_label() -> String {
    "Baud rate".to_string()
}

fn default_rect() -> Rect {
    Rect::new(20, 40, 200, 30)
}

fn default_enabled() -> bool {
    true
}

fn default_items() -> Vec<ItemConfig> {
    [9600, 19200, 38400, 57600, 115200]
        .iter()
        .map(|&baud| ItemConfig::new(&baud.to_string(), baud))
        .collect()
}

impl AppConfig {
    /// Create a new configuration with default values.
    ///
    /// The default script opens the list, drags to the bottom, picks the
    /// last visible row and opens the list again.
    pub fn new() -> Self {
        let rect = default_rect();
        let list_top = rect.y + rect.height;
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            label: default_label(),
            rect,
            style: ComboBoxStyle::default(),
            screen_background: Color::BLACK,
            items: default_items(),
            initial_selection: None,
            enabled: true,
            presses: vec![
                Point::new(rect.x + 10, rect.y + 10),
                Point::new(rect.right() - 2, list_top + 89),
                Point::new(rect.x + 40, list_top + 75),
                Point::new(rect.x + 10, rect.y + 10),
            ],
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.style.validate(config.rect)?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "panelkit-demo.json"
    }

    /// Get the default config file path.
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("panelkit").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("panelkit")
                    .join(Self::default_filename())
            })
        }
    }

    /// Build the configured combo box: style, items, initial selection and
    /// enabled state applied.
    pub fn build_combo_box(&self) -> Result<ComboBox, ConfigError> {
        let mut combo = ComboBox::new(self.rect, self.label.clone(), self.style.clone())?;
        for item in &self.items {
            combo.add_item(item.text.clone(), item.value);
        }
        if let Some(index) = self.initial_selection {
            if index >= self.items.len() {
                log::warn!(
                    "initial selection {} is out of range for {} items, ignoring",
                    index,
                    self.items.len()
                );
            }
            combo.set_selected_index(index);
        }
        combo.set_enabled(self.enabled);
        Ok(combo)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Style does not fit the configured rectangle
    #[error("Invalid combo box style: {0}")]
    StyleError(#[from] StyleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = AppConfig::default();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"version\": 1"));
        let parsed = AppConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config.label, "Baud rate");
        assert_eq!(config.items.len(), 5);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.enabled);
        assert!(config.presses.is_empty());
    }

    #[test]
    fn test_version_too_new() {
        let err = AppConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: 1
            }
        ));
    }

    #[test]
    fn test_invalid_style_rejected() {
        let err =
            AppConfig::from_json(r#"{ "version": 1, "style": { "max_visible_items": 0 } }"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::StyleError(StyleError::NoVisibleItems)));
    }

    #[test]
    fn test_log_level_names() {
        let config = AppConfig::from_json(r#"{ "version": 1, "log_level": "trace" }"#).unwrap();
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_build_combo_box() {
        let mut config = AppConfig::default();
        config.initial_selection = Some(4);
        config.enabled = false;
        let combo = config.build_combo_box().unwrap();
        assert_eq!(combo.len(), 5);
        assert_eq!(combo.selected_value(), Some(115200));
        assert_eq!(combo.scroll_offset(), 2);
        assert!(!combo.is_enabled());
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join(format!("panelkit-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "version": 1, "label": "Port" }"#).unwrap();
        let config = AppConfig::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.label, "Port");

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_build_ignores_bad_initial_selection() {
        let mut config = AppConfig::default();
        config.initial_selection = Some(10);
        let combo = config.build_combo_box().unwrap();
        assert_eq!(combo.selected_index(), Some(0));
    }
}
