//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `wordclock.toml` in the working directory (or the file named by
//! `WORDCLOCK_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::time::Duration;

use serde::Deserialize;
use wordclock_adapter_http_reqwest::HttpConfig;
use wordclock_domain::color::ColorPolicy;

const DEFAULT_PATH: &str = "wordclock.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device addresses and request timeout.
    pub device: HttpConfig,
    /// Panel behaviour.
    pub panel: PanelConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// How the panel treats input and the connect flow.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Refuse malformed colours instead of sending `null` channels.
    pub strict_color: bool,
    /// How long to wait for an answer to a connect request before exiting.
    pub connect_grace_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("WORDCLOCK_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("WORDCLOCK_URL") {
            self.device.base_url = val;
        }
        if let Some(val) = lookup("WORDCLOCK_AP_URL") {
            self.device.ap_url = val;
        }
        if let Some(secs) = lookup("WORDCLOCK_TIMEOUT").and_then(|val| val.parse().ok()) {
            self.device.timeout_secs = secs;
        }
        if let Some(val) = lookup("WORDCLOCK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("device.base_url", &self.device.base_url),
            ("device.ap_url", &self.device.ap_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be an http:// or https:// URL, got {url:?}"
                )));
            }
        }
        Ok(())
    }
}

impl PanelConfig {
    #[must_use]
    pub fn color_policy(&self) -> ColorPolicy {
        if self.strict_color {
            ColorPolicy::Strict
        } else {
            ColorPolicy::Lenient
        }
    }

    #[must_use]
    pub fn connect_grace(&self) -> Duration {
        Duration::from_millis(self.connect_grace_ms)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            strict_color: false,
            connect_grace_ms: 2000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "wordclockctl=info,wordclock=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
