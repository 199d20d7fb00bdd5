//! Optional TOML configuration.
//!
//! ```toml
//! log_level = "info"
//! log_file = "salary.log"
//!
//! [model]
//! format = "random_forest"
//! path = "salary_predictor.json"
//! ```
//!
//! Every key is optional. A relative `model.path` is resolved against the
//! directory holding the config file.

use std::path::{Path, PathBuf};

use salary_core::ModelConfig;
use serde::Deserialize;
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "salary_predictor.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSection {
    pub format: String,
    pub path: PathBuf,
}

impl Default for ModelSection {
    fn default() -> Self {
        let ModelConfig { format, path } = ModelConfig::default();
        Self { format, path }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// `EnvFilter` directive applied after startup.
    pub log_level: Option<String>,
    /// Append log records to this file as well as stderr.
    pub log_file: Option<PathBuf>,
    pub model: ModelSection,
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.model.path.is_relative() {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                config.model.path = dir.join(&config.model.path);
            }
        }

        Ok(config)
    }

    /// Loads `explicit` when given. Otherwise loads [`DEFAULT_CONFIG_FILE`]
    /// from the working directory if present, or falls back to defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Filter directive to apply at startup, if any.
    ///
    /// Precedence: `--log-level`, then `RUST_LOG` (already in effect, so
    /// nothing to apply), then `log_level` from the file.
    pub fn log_directive<'a>(
        &'a self,
        cli_level: Option<&'a str>,
        env_filter_set: bool,
    ) -> Option<&'a str> {
        match cli_level {
            Some(level) => Some(level),
            None if env_filter_set => None,
            None => self.log_level.as_deref(),
        }
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            format: self.model.format.clone(),
            path: self.model.path.clone(),
        }
    }
}
