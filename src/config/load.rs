//! Configuration loading from files.

use std::path::{Path, PathBuf};

use super::{Config, ConfigError, DEFAULT_CONFIG_FILE};

impl Config {
    /// Load the config from the command line argument.
    ///
    /// An explicitly named file must exist. Without an argument,
    /// `resume.yaml` in the working directory is used if present and the
    /// defaults otherwise. Returns the config together with the base path
    /// that relative paths resolve against.
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CwdFailure)?;

        let (config_file, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        let config_file = if config_file.is_relative() {
            cwd.join(config_file)
        } else {
            config_file
        };

        if !required && !config_file.exists() {
            tracing::debug!(path = %config_file.display(), "no config file, using defaults");
            return Ok((Self::default(), cwd));
        }

        let config = Self::load_from_file(&config_file)?;
        Ok((config, base_path_from_config(&config_file)))
    }

    /// Load the config from a file path
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;

        // An empty file deserializes to a YAML null rather than a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
