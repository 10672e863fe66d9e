//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;

/// Environment variable holding a log filter directive.
pub const LOG_FILTER_ENV: &str = "DIAGLAB_LOG";
/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "DIAGLAB_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name; anything but `json` is pretty.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; stderr when `None`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Builds the config from file settings with environment overrides.
    ///
    /// Precedence for the filter: `DIAGLAB_LOG`, then `--verbose`, then the
    /// config file, then `warn`.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let env_filter = std::env::var(LOG_FILTER_ENV).ok();
        let env_format = std::env::var(LOG_FORMAT_ENV).ok();
        Self::from_parts(settings, verbose, env_filter, env_format)
    }

    fn from_parts(
        settings: Option<&LoggingSettings>,
        verbose: bool,
        env_filter: Option<String>,
        env_format: Option<String>,
    ) -> Self {
        let file_level = settings.and_then(|s| s.level.clone());
        let filter = env_filter
            .filter(|f| !f.trim().is_empty())
            .or_else(|| verbose.then(|| VERBOSE_FILTER.to_string()))
            .or(file_level)
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = env_format
            .or_else(|| settings.and_then(|s| s.format.clone()))
            .map_or(LogFormat::Pretty, |f| LogFormat::parse(&f));

        Self {
            filter,
            format,
            file: settings.and_then(|s| s.file.clone()),
        }
    }
}
