use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};

use crate::config::SuiteConfig;
use crate::error::ConfigError;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "blogscan.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "BLOGSCAN_CONFIG";

/// Prefix for per-field environment overrides.
pub const ENV_PREFIX: &str = "BLOGSCAN_";

impl SuiteConfig {
    /// Load and validate configuration from the environment, the config file
    /// and defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when `BLOGSCAN_CONFIG` names a
    /// missing file, [`ConfigError::Load`] for unparsable sources, and a
    /// validation error when the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(explicit_config_path().as_deref())
    }

    /// The config file [`load`](Self::load) reads, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when `BLOGSCAN_CONFIG` names a
    /// missing file.
    pub fn source_file() -> Result<Option<PathBuf>, ConfigError> {
        Self::config_file(explicit_config_path().as_deref())
    }

    /// Resolves the config file: `config_path` if given, otherwise
    /// `blogscan.toml` in the working directory when it exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when `config_path` does not exist.
    pub fn config_file(config_path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
        match config_path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Ok(Some(path.to_path_buf())),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                Ok(default_path.exists().then(|| default_path.to_path_buf()))
            }
        }
    }

    /// Like [`load`](Self::load) with an explicit config file path instead
    /// of `BLOGSCAN_CONFIG`. `None` falls back to `blogscan.toml` if present.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::figment(config_path)?.extract::<Self>()?;
        config.validate()?;
        Ok(config)
    }

    /// The merged provider stack, without extraction or validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when `config_path` does not exist.
    pub fn figment(config_path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = Self::config_file(config_path)? {
            figment = figment.merge(Toml::file(path));
        }

        // BLOGSCAN_CONFIG names the file; it is not a field.
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&["config"])
                .split("__"),
        );

        Ok(figment)
    }
}

fn explicit_config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).map(PathBuf::from)
}
