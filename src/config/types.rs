use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::portal::Language;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Language the portal starts in ("en" or "hi").
    #[serde(default)]
    pub language: Language,
    /// How long the priority banner stays up after a submission (default: 5).
    #[serde(default = "default_banner_timeout")]
    pub banner_timeout_seconds: u64,
    /// Redraw interval when no input arrives, in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs only
/// go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Logging is off when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_banner_timeout() -> u64 {
    5
}

fn default_tick_rate() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Defaults {
    pub fn banner_timeout(&self) -> Duration {
        Duration::from_secs(self.banner_timeout_seconds)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: Language::default(),
            banner_timeout_seconds: default_banner_timeout(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
