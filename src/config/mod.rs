//! Configuration management.
//!
//! Configuration is optional. A TOML file may name a catalog file, the
//! default output format and logging settings:
//!
//! ```toml
//! catalog_path = "/etc/diaglab/catalog.json"
//! output_format = "table"
//!
//! [logging]
//! level = "info"
//! format = "json"
//! file = "/var/log/diaglab.log"
//! ```

use crate::cli::OutputFormat;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "DIAGLAB_CONFIG_PATH";

/// Main configuration for diaglab.
#[derive(Debug, Clone, Default)]
pub struct DiaglabConfig {
    /// Catalog file to load instead of the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Default output format for `list` and `show`.
    pub output_format: OutputFormat,
    /// Logging settings.
    pub logging: LoggingSettings,
    /// Problems met while loading, e.g. an unreadable default config file.
    ///
    /// Config is resolved before logging is up, so callers log these once
    /// the subscriber is installed.
    pub warnings: Vec<String>,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `diaglab=debug`.
    pub level: Option<String>,
    /// `pretty` or `json`.
    pub format: Option<String>,
    /// Append log output to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Catalog file path.
    pub catalog_path: Option<String>,
    /// Output format name.
    pub output_format: Option<String>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl DiaglabConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for [`ConfigFile`].
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| Error::operation("parse_config_file", e))?;
        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::operation("read_config_file", format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the platform config dir, then `~/.config/diaglab/`. Returns
    /// defaults if neither holds a readable config file; skipped files are
    /// recorded in [`DiaglabConfig::warnings`].
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let mut candidates = vec![
            base_dirs.config_dir().join("diaglab").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("diaglab")
                .join("config.toml"),
        ];
        // On Linux both usually resolve to the same file.
        candidates.dedup();
        Self::load_first_readable(&candidates)
    }

    /// Loads the first existing candidate that parses.
    fn load_first_readable(candidates: &[PathBuf]) -> Self {
        let mut warnings = Vec::new();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(mut config) => {
                    config.warnings = warnings;
                    return config;
                },
                Err(e) => {
                    warnings.push(format!(
                        "ignoring unreadable config file {}: {e}",
                        path.display()
                    ));
                },
            }
        }

        Self {
            warnings,
            ..Self::default()
        }
    }

    /// Resolves configuration: explicit path, then [`CONFIG_PATH_ENV`], then
    /// the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be loaded.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
            if !env_path.trim().is_empty() {
                return Self::load_from_file(Path::new(&env_path));
            }
        }

        Ok(Self::load_default())
    }

    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(path) = file.catalog_path {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(format) = file.output_format {
            config.output_format = OutputFormat::parse(&format);
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        config
    }

    /// Sets the catalog path.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }
}
