//! Configuration loading for the FitCoach TUI.
//!
//! The TOML file is optional; every field has a default. `BACKEND_URL`
//! overrides `chat_url` from the file.

use fitcoach_core::endpoint::{resolve_backend_url, validate_chat_url, BACKEND_URL_ENV};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "FITCOACH_TUI_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    #[serde(default = "resolve_backend_url")]
    pub chat_url: String,
    /// Unset means requests never time out.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "fresh".to_string(),
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    250
}

fn default_log_path() -> PathBuf {
    PathBuf::from("fitcoach-tui.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            chat_url: resolve_backend_url(),
            request_timeout_ms: None,
            tick_interval_ms: default_tick_interval_ms(),
            log_path: default_log_path(),
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let mut config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                config.chat_url = url.trim().to_string();
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: TuiConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_chat_url(&self.chat_url).map_err(|err| ConfigError::InvalidValue {
            field: "chat_url",
            reason: err.to_string(),
        })?;
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0 when set".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.trim().to_ascii_lowercase() != "fresh" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'fresh' is supported".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
