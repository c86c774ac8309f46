//! Application configuration.
//!
//! Configuration is loaded from `~/.config/ppop/config.toml` and provides
//! window, server, popup and logging settings. Every section has sensible
//! defaults, so the file is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use etcetera::BaseStrategy as _;
use serde::Deserialize;

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub server: ServerConfig,
    pub popup: PopupConfig,
    pub logging: LoggingConfig,
}

/// Which event on the profile icon opens the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopupTrigger {
    /// Mouse-enter opens the popup; a click navigates to the profile page.
    #[default]
    Hover,
    /// A click opens the popup; navigation is suppressed.
    Click,
}

/// Popup behavior.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub trigger: PopupTrigger,
    /// Also hide the popup when the mouse leaves the icon.
    pub hide_on_leave: bool,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Profile server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the server hosting `/user/{id}/json/`.
    pub base_url: String,
    /// User id shown when none is given on the command line.
    pub default_user: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            server: ServerConfig::default(),
            popup: PopupConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Profile".to_string(),
            width: 480.0,
            height: 360.0,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            default_user: "1".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from("/tmp/ppop.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "pointermove".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location (`~/.config/ppop/config.toml`).
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        let strategy = etcetera::choose_base_strategy()
            .context("could not determine the user config directory")?;
        let config_path = strategy.config_dir().join("ppop").join("config.toml");
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let config = toml::from_str::<AppConfig>(&content)
            .with_context(|| format!("could not parse {}", path.display()))?;
        Ok(config)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the server base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.server.base_url = base_url.into();
        self
    }

    /// Set the popup trigger mode.
    #[must_use]
    pub fn with_trigger(mut self, trigger: PopupTrigger) -> Self {
        self.popup.trigger = trigger;
        self
    }

    /// Set whether the popup hides when the mouse leaves the icon.
    #[must_use]
    pub fn with_hide_on_leave(mut self, enabled: bool) -> Self {
        self.popup.hide_on_leave = enabled;
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "Profile");
        assert!((config.window.width - 480.0).abs() < f64::EPSILON);
        assert!((config.window.height - 360.0).abs() < f64::EPSILON);
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.server.default_user, "1");
        assert_eq!(config.popup.trigger, PopupTrigger::Hover);
        assert!(!config.popup.hide_on_leave);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = AppConfig::default()
            .with_window_title("Who is this?")
            .with_window_size(640.0, 480.0)
            .with_base_url("https://profiles.example.com")
            .with_trigger(PopupTrigger::Click)
            .with_hide_on_leave(true)
            .with_log_level("debug");

        assert_eq!(config.window.title, "Who is this?");
        assert!((config.window.width - 640.0).abs() < f64::EPSILON);
        assert_eq!(config.server.base_url, "https://profiles.example.com");
        assert_eq!(config.popup.trigger, PopupTrigger::Click);
        assert!(config.popup.hide_on_leave);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn deserialize_partial_config() {
        let toml_str = r#"
[server]
base_url = "http://10.0.0.5:8000"

[popup]
hide_on_leave = true
"#;
        let config = toml::from_str::<AppConfig>(toml_str).expect("should deserialize");
        assert_eq!(config.server.base_url, "http://10.0.0.5:8000");
        assert!(config.popup.hide_on_leave);
        // Untouched sections keep their defaults
        assert_eq!(config.window.title, "Profile");
        assert_eq!(config.popup.trigger, PopupTrigger::Hover);
    }

    #[test]
    fn deserialize_click_trigger() {
        let toml_str = r#"
[popup]
trigger = "click"
"#;
        let config = toml::from_str::<AppConfig>(toml_str).expect("should deserialize");
        assert_eq!(config.popup.trigger, PopupTrigger::Click);
    }

    #[test]
    fn load_from_nonexistent_path_returns_error() {
        let result = AppConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_from_malformed_file_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[popup\ntrigger = ").expect("write");
        assert!(AppConfig::load_from(&path).is_err());
    }
}
