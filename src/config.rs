//! Application configuration
//!
//! Loaded from JSON. Every field has a default, so an empty object is a
//! valid configuration.

use std::path::Path;
use std::time::Duration;

use app_ui::{NavigationTab, ThemeName};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON did not parse
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Color theme
    #[serde(default)]
    pub theme: ThemeName,

    /// Device scale factor for the token registry
    #[serde(default = "default_base_scale")]
    pub base_scale: f32,

    /// Delay before the memory chat replies
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Tab shown at launch
    #[serde(default)]
    pub initial_tab: NavigationTab,

    /// `tracing` filter directives
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Whether the device can render backdrop blur
    #[serde(default = "default_true")]
    pub blur: bool,
}

fn default_base_scale() -> f32 {
    app_ui::BASE_SCALE
}

fn default_reply_delay_ms() -> u64 {
    1500
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            base_scale: default_base_scale(),
            reply_delay_ms: default_reply_delay_ms(),
            initial_tab: NavigationTab::default(),
            log_filter: default_log_filter(),
            blur: true,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Load a file if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                tracing::warn!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !self.base_scale.is_finite() || self.base_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "baseScale must be a positive number, got {}",
                self.base_scale
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logFilter must not be empty".to_string()));
        }
        Ok(())
    }

    /// Reply delay as a duration
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}
