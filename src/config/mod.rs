//! Configuration loading and types for resume-build.
//!
//! - Type definitions for `resume.yaml` (`types`)
//! - Loading configs from files (`load`)

mod load;
mod types;

use std::path::PathBuf;

pub use load::base_path_from_config;
pub use types::{Config, MarkdownConfig, PdfConfig};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "resume.yaml";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, serde_yaml::Error),
}
