//! Core configuration.
//!
//! Read from the process environment once at startup. A `.env` file in the working
//! directory is loaded first when present.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

pub const ENV_RULES_PATH: &str = "EMOBUDDY_RULES_PATH";
pub const ENV_HISTORY_WINDOW: &str = "EMOBUDDY_HISTORY_WINDOW";
pub const ENV_RNG_SEED: &str = "EMOBUDDY_RNG_SEED";
pub const ENV_LOG_FORMAT: &str = "EMOBUDDY_LOG_FORMAT";

const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}

/// Startup configuration of the responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CoreConfig {
    /// JSON rulebook replacing the built-in tables.
    pub rules_path: Option<PathBuf>,
    /// How many of the most recent history messages are passed along.
    #[validate(range(max = 100))]
    pub history_window: usize,
    /// Seed for reproducible reply selection.
    pub rng_seed: Option<u64>,
    pub log_format: LogFormat,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            history_window: DEFAULT_HISTORY_WINDOW,
            rng_seed: None,
            log_format: LogFormat::default(),
        }
    }
}

impl CoreConfig {
    /// Loads `.env` (if any) and then reads the environment.
    pub fn load() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Reads the configuration from environment variables only.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(path) = non_empty_var(ENV_RULES_PATH) {
            config.rules_path = Some(PathBuf::from(path));
        }
        if let Some(window) = non_empty_var(ENV_HISTORY_WINDOW) {
            config.history_window = window.trim().parse()?;
        }
        if let Some(seed) = non_empty_var(ENV_RNG_SEED) {
            config.rng_seed = Some(seed.trim().parse()?);
        }
        if let Some(format) = non_empty_var(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().ok(), Some(LogFormat::Json));
        assert_eq!("bunyan".parse::<LogFormat>().ok(), Some(LogFormat::Bunyan));
        assert_eq!(" text ".parse::<LogFormat>().ok(), Some(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_defaults_validate() {
        let config = CoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.history_window, 10);
    }

    #[test]
    fn test_window_range() {
        let config = CoreConfig {
            history_window: 101,
            ..CoreConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
