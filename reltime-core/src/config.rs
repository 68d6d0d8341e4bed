//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/reltime/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/reltime/` (~/.config/reltime/)
//! - State/Logs: `$XDG_STATE_HOME/reltime/` (~/.local/state/reltime/)

use crate::duration::{DurationOptions, DEFAULT_DURATION_FALLBACK};
use crate::error::{Error, Result};
use crate::timestamp::{TimestampOptions, DEFAULT_TIMESTAMP_FALLBACK};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name prefix of the daily rolling log (`reltime.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "reltime.log";

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
    /// Formatting defaults
    #[serde(default)]
    pub format: FormatConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default formatting options applied when a caller does not override them
#[derive(Debug, Deserialize, Clone)]
pub struct FormatConfig {
    /// Locale identifier (e.g. "pt-BR"); English phrasing when unset
    pub locale: Option<String>,

    /// IANA timezone for date fallback display; host zone when unset
    pub timezone: Option<String>,

    /// Show short dates for timestamps more than 7 days away
    #[serde(default)]
    pub date_fallback: bool,

    /// Returned for missing or negative durations
    #[serde(default = "default_duration_fallback")]
    pub duration_fallback: String,

    /// Returned for missing timestamps
    #[serde(default = "default_timestamp_fallback")]
    pub timestamp_fallback: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: None,
            timezone: None,
            date_fallback: false,
            duration_fallback: default_duration_fallback(),
            timestamp_fallback: default_timestamp_fallback(),
        }
    }
}

impl FormatConfig {
    /// Duration options seeded from this config
    pub fn duration_options(&self) -> DurationOptions {
        DurationOptions {
            suffix: true,
            fallback: self.duration_fallback.clone(),
            locale: self.locale.clone(),
        }
    }

    /// Timestamp options seeded from this config
    pub fn timestamp_options(&self) -> TimestampOptions {
        TimestampOptions {
            date_fallback: self.date_fallback,
            timezone: self.timezone.clone(),
            fallback: self.timestamp_fallback.clone(),
            locale: self.locale.clone(),
        }
    }
}

fn default_duration_fallback() -> String {
    DEFAULT_DURATION_FALLBACK.to_string()
}

fn default_timestamp_fallback() -> String {
    DEFAULT_TIMESTAMP_FALLBACK.to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
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
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/reltime/config.toml` (~/.config/reltime/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("reltime").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/reltime/` (~/.local/state/reltime/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("reltime")
    }

    /// Returns the log directory
    ///
    /// Files rotate daily as `reltime.log.YYYY-MM-DD` inside `$XDG_STATE_HOME/reltime/`
    pub fn log_dir() -> PathBuf {
        Self::state_dir()
    }

    /// Ensure XDG base directory environment variables are set.
    ///
    /// This is mainly for CLI binaries that want explicit, stable path behavior
    /// before invoking other components that read these env vars.
    pub fn ensure_xdg_env() {
        let home = home_dir();

        if std::env::var("XDG_STATE_HOME").is_err() {
            std::env::set_var("XDG_STATE_HOME", home.join(".local/state"));
        }

        if std::env::var("XDG_CONFIG_HOME").is_err() {
            std::env::set_var("XDG_CONFIG_HOME", home.join(".config"));
        }
    }
}
