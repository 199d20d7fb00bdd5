use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::{LinearLoader, ModelError, RandomForestLoader, SalaryModel};

/// Where the model artifact lives and how to read it.
///
/// `format` must match the [`ModelLoader::format_name`] of a registered
/// loader. `path` is handed to that loader unchanged.
///
/// | format          | artifact                                |
/// |-----------------|-----------------------------------------|
/// | `random_forest` | JSON forest of regression trees          |
/// | `linear`        | JSON intercept plus coefficient vector   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Lowercase identifier matching a registered loader (e.g. `"random_forest"`).
    pub format: String,
    /// Path to the serialized model.
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            format: "random_forest".to_string(),
            path: PathBuf::from("salary_predictor.json"),
        }
    }
}

/// One implementation per artifact format. Each format module exports a
/// unit struct implementing this trait, registered with a [`ModelRegistry`]
/// at startup.
pub trait ModelLoader: Send + Sync {
    /// Unique, lowercase identifier for this format.
    fn format_name(&self) -> &'static str;

    /// Read and validate the artifact, returning a ready-to-use model.
    fn load(
        &self,
        config: &ModelConfig,
    ) -> Result<Box<dyn SalaryModel>, ModelError>;
}

/// Registry of [`ModelLoader`] instances, keyed by format name.
pub struct ModelRegistry {
    loaders: HashMap<&'static str, Box<dyn ModelLoader>>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// A registry holding every format this crate can read.
    pub fn with_builtin_formats() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RandomForestLoader));
        registry.register(Box::new(LinearLoader));
        registry
    }

    /// Register a loader. A loader with the same name is replaced.
    pub fn register(
        &mut self,
        loader: Box<dyn ModelLoader>,
    ) {
        self.loaders.insert(loader.format_name(), loader);
    }

    /// Names of every registered format, sorted alphabetically.
    pub fn available_formats(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.loaders.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the loader that matches `config.format`.
    ///
    /// # Errors
    /// * [`ModelError::UnknownFormat`] when no loader is registered under
    ///   the requested name.
    /// * Any error the chosen loader returns.
    pub fn load(
        &self,
        config: &ModelConfig,
    ) -> Result<Box<dyn SalaryModel>, ModelError> {
        let loader = self
            .loaders
            .get(config.format.as_str())
            .ok_or_else(|| ModelError::UnknownFormat {
                format: config.format.clone(),
                available: self.available_formats(),
            })?;

        loader.load(config)
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn open_artifact(path: &Path) -> Result<BufReader<File>, ModelError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })
}
