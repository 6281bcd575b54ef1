//! Stylesheet building.
//!
//! All CSS sources matching the configured glob are concatenated in
//! lexicographic path order and preprocessed as SCSS (variables,
//! nesting, mixins) into plain CSS.

use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum StylesheetError {
    #[error("invalid stylesheet pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("failed to list stylesheet sources: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to read stylesheet {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("stylesheet preprocessing failed: {0}")]
    Preprocess(String),
}

/// Find the stylesheet sources matching `pattern`, sorted by path.
pub fn collect_sources(pattern: &Path) -> Result<Vec<PathBuf>, StylesheetError> {
    let pattern = pattern.to_string_lossy();
    let paths = glob::glob(&pattern).map_err(|source| StylesheetError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut sources = Vec::new();
    for path in paths {
        let path = path?;
        if path.is_file() {
            sources.push(path);
        }
    }
    sources.sort();

    Ok(sources)
}

/// Concatenate and preprocess every source matching `pattern`.
pub fn build_stylesheet(pattern: &Path) -> Result<String, StylesheetError> {
    let sources = collect_sources(pattern)?;
    if sources.is_empty() {
        tracing::warn!(pattern = %pattern.display(), "no stylesheet sources matched");
        return Ok(String::new());
    }

    let mut combined = String::new();
    for source in &sources {
        tracing::debug!(path = %source.display(), "adding stylesheet source");
        let content =
            std::fs::read_to_string(source).map_err(|e| StylesheetError::Read(source.clone(), e))?;
        combined.push_str(&content);
        combined.push('\n');
    }

    preprocess(&combined)
}

/// Run the SCSS preprocessor over already-concatenated source text.
pub fn preprocess(source: &str) -> Result<String, StylesheetError> {
    grass::from_string(source.to_owned(), &grass::Options::default())
        .map_err(|e| StylesheetError::Preprocess(e.to_string()))
}
