mod defaults;


use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::TayfError;
use crate::i18n::{display_offset, Language, TextTable};
use defaults::*;

/// Top-level site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Page-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Language used when a request does not pick one.
    #[serde(default = "default_language")]
    pub default_language: Language,
    /// Viewport width assumed when a request does not report one.
    #[serde(default = "default_viewport_width")]
    pub default_viewport_width: u32,
    /// Optional TOML file with `[tr]`/`[en]` text overrides. Empty = builtin only.
    #[serde(default)]
    pub text_overrides: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            default_language: default_language(),
            default_viewport_width: default_viewport_width(),
            text_overrides: String::new(),
        }
    }
}

impl SiteConfig {
    /// Build the text table, applying overrides when configured.
    pub fn text_table(&self) -> Result<TextTable, TayfError> {
        if self.text_overrides.is_empty() {
            return Ok(TextTable::builtin());
        }
        TextTable::load(Path::new(&self.text_overrides))
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Live feed endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    #[serde(default = "default_launches_url")]
    pub launches_url: String,
    /// Includes the access key as a query parameter.
    #[serde(default = "default_apod_url")]
    pub apod_url: String,
    /// Offset launch times are displayed in, minutes east of UTC.
    #[serde(default = "default_offset_minutes")]
    pub display_utc_offset_minutes: i32,
    /// Request timeout in seconds. 0 = transport default.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            launches_url: default_launches_url(),
            apod_url: default_apod_url(),
            display_utc_offset_minutes: default_offset_minutes(),
            timeout_secs: 0,
        }
    }
}

impl FeedsConfig {
    /// Display offset; validated by `load`, UTC if somehow out of range.
    pub fn display_offset(&self) -> FixedOffset {
        display_offset(self.display_utc_offset_minutes).unwrap_or_else(|| Utc.fix())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for a daily log file. Empty = stderr only.
    #[serde(default)]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: String::new(),
        }
    }
}

/// Check values serde cannot check on its own.
pub fn validate(config: &Config) -> Result<(), TayfError> {
    if display_offset(config.feeds.display_utc_offset_minutes).is_none() {
        return Err(TayfError::Config(format!(
            "display_utc_offset_minutes out of range: {}",
            config.feeds.display_utc_offset_minutes
        )));
    }
    if config.feeds.launches_url.is_empty() || config.feeds.apod_url.is_empty() {
        return Err(TayfError::Config("feed URLs must not be empty".to_string()));
    }
    Ok(())
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, TayfError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| TayfError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| TayfError::Config(format!("failed to parse config: {}", e)))?;

    validate(&config)?;
    Ok(config)
}
