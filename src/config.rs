//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/linkbeacon/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/linkbeacon/` (~/.config/linkbeacon/)
//! - State/Logs: `$XDG_STATE_HOME/linkbeacon/` (~/.local/state/linkbeacon/)

use crate::error::{Error, Result};
use crate::plugins::download_link::DownloadLinkOptions;
use crate::types::FieldsObj;
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Defaults for download link tracking
    #[serde(default)]
    pub download_links: DownloadLinkSettings,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Serializable subset of [`DownloadLinkOptions`].
///
/// The hit filter is code, not data, so it cannot come from the config file;
/// everything else can.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadLinkSettings {
    /// Event types to observe
    #[serde(default = "default_events")]
    pub events: Vec<String>,

    /// Selector matching the links to track
    #[serde(default = "default_link_selector")]
    pub link_selector: String,

    /// Static fields merged into every hit
    #[serde(default)]
    pub fields_obj: FieldsObj,

    /// Attribute prefix for per-element field overrides
    #[serde(default = "default_attribute_prefix")]
    pub attribute_prefix: String,
}

impl Default for DownloadLinkSettings {
    fn default() -> Self {
        Self {
            events: default_events(),
            link_selector: default_link_selector(),
            fields_obj: FieldsObj::new(),
            attribute_prefix: default_attribute_prefix(),
        }
    }
}

fn default_events() -> Vec<String> {
    vec!["click".to_string()]
}

fn default_link_selector() -> String {
    "a[download]".to_string()
}

fn default_attribute_prefix() -> String {
    "ga-".to_string()
}

impl DownloadLinkSettings {
    /// Convert into runtime options. A hit filter can be attached afterwards
    /// with struct-update syntax.
    pub fn into_options(self) -> DownloadLinkOptions {
        DownloadLinkOptions {
            events: self.events,
            link_selector: self.link_selector,
            fields_obj: self.fields_obj,
            attribute_prefix: self.attribute_prefix,
            hit_filter: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/linkbeacon/config.toml` (~/.config/linkbeacon/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("linkbeacon").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/linkbeacon/` (~/.local/state/linkbeacon/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("linkbeacon")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/linkbeacon/linkbeacon.log` (~/.local/state/linkbeacon/linkbeacon.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("linkbeacon.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.download_links.events, vec!["click"]);
        assert_eq!(config.download_links.link_selector, "a[download]");
        assert_eq!(config.download_links.attribute_prefix, "ga-");
        assert!(config.download_links.fields_obj.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[logging]
level = "debug"

[download_links]
events = ["click", "contextmenu"]
link_selector = "a.download"
attribute_prefix = "data-ga-"

[download_links.fields_obj]
nonInteraction = true
eventValue = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.download_links.events, vec!["click", "contextmenu"]);
        assert_eq!(config.download_links.link_selector, "a.download");
        assert_eq!(config.download_links.attribute_prefix, "data-ga-");
        assert_eq!(config.download_links.fields_obj["nonInteraction"], json!(true));
        assert_eq!(config.download_links.fields_obj["eventValue"], json!(5));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml = r#"
[download_links]
attribute_prefix = "data-ga-"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.download_links.attribute_prefix, "data-ga-");
        assert_eq!(config.download_links.events, vec!["click"]);
        assert_eq!(config.download_links.link_selector, "a[download]");
    }

    #[test]
    fn test_settings_into_options() {
        let settings = DownloadLinkSettings {
            events: vec!["click".to_string()],
            link_selector: "a.download".to_string(),
            fields_obj: [("nonInteraction".to_string(), json!(true))]
                .into_iter()
                .collect(),
            attribute_prefix: "ga-".to_string(),
        };

        let opts = settings.into_options();
        assert_eq!(opts.link_selector, "a.download");
        assert_eq!(opts.fields_obj["nonInteraction"], json!(true));
        assert!(opts.hit_filter.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"warn\"").unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let result = Config::load_from(&PathBuf::from("/nonexistent/config.toml"));
        assert!(result.is_err());
    }
}
