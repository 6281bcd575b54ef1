//! Configuration type definitions.
//!
//! These types mirror `resume.yaml`. Every field has a default, so an empty
//! file (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// =============================================================================
// Root config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base directory for stylesheet sources and templates (relative to the config file)
    #[serde(default = "default_assets")]
    pub assets: PathBuf,
    /// Glob matching the CSS sources, relative to `assets`
    #[serde(default = "default_stylesheets")]
    pub stylesheets: String,
    /// Template directory, relative to `assets`
    #[serde(default = "default_templates")]
    pub templates: PathBuf,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub pdf: PdfConfig,
    /// Arbitrary values passed to every template as `extra.*`
    #[serde(default)]
    pub extra: serde_json::Value,
}

fn default_assets() -> PathBuf {
    PathBuf::from("assets")
}

fn default_stylesheets() -> String {
    "css/*.css".to_string()
}

fn default_templates() -> PathBuf {
    PathBuf::from("templates")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: default_assets(),
            stylesheets: default_stylesheets(),
            templates: default_templates(),
            markdown: MarkdownConfig::default(),
            pdf: PdfConfig::default(),
            extra: serde_json::Value::Null,
        }
    }
}

impl Config {
    /// The asset directory, resolved against `base_path` when relative.
    pub fn assets_dir(&self, base_path: &Path) -> PathBuf {
        if self.assets.is_relative() {
            base_path.join(&self.assets)
        } else {
            self.assets.clone()
        }
    }

    /// Full glob pattern for the stylesheet sources.
    ///
    /// Only `stylesheets` is treated as a pattern; metacharacters in the
    /// asset directory itself are escaped.
    pub fn stylesheet_pattern(&self, base_path: &Path) -> PathBuf {
        let assets_dir = self.assets_dir(base_path);
        let escaped = glob::Pattern::escape(&assets_dir.to_string_lossy());
        PathBuf::from(escaped).join(&self.stylesheets)
    }

    pub fn templates_dir(&self, base_path: &Path) -> PathBuf {
        self.assets_dir(base_path).join(&self.templates)
    }
}

// =============================================================================
// Markdown configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
}

fn default_markdown_extensions() -> Vec<String> {
    vec![
        "definition_lists".to_string(),
        "footnotes".to_string(),
        "heading_attributes".to_string(),
        "strikethrough".to_string(),
        "tables".to_string(),
    ]
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
        }
    }
}

// =============================================================================
// PDF configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    /// The HTML-to-PDF renderer program
    #[serde(default = "default_pdf_command")]
    pub command: String,
    /// Extra arguments placed before the input and output paths
    #[serde(default)]
    pub args: Vec<String>,
    /// Class patched onto `<body class="">` in the print HTML
    #[serde(default = "default_body_class")]
    pub body_class: String,
    /// Keep the intermediate print HTML after rendering
    #[serde(default = "default_keep_print_html")]
    pub keep_print_html: bool,
}

fn default_pdf_command() -> String {
    "wkhtmltopdf".to_string()
}

fn default_body_class() -> String {
    "pdf".to_string()
}

fn default_keep_print_html() -> bool {
    true
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            command: default_pdf_command(),
            args: Vec::new(),
            body_class: default_body_class(),
            keep_print_html: default_keep_print_html(),
        }
    }
}
