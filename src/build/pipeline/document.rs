//! Document types for pipeline processing.

use std::path::PathBuf;

/// The résumé being processed through the pipeline.
///
/// Fields fill in as stages run:
///
/// 1. Initially: `markdown` = source text
/// 2. After stylesheet: `stylesheet` = preprocessed CSS
/// 3. After markdown: `html` = rendered fragment
/// 4. After title: `title` populated
/// 5. After template: `site_fragment`, `page_html`, `css` populated
#[derive(Debug)]
pub struct ResumeDocument {
    /// Path to the source Markdown file
    pub source_path: PathBuf,

    /// Source text
    pub markdown: String,

    /// Preprocessed stylesheet text.
    pub stylesheet: String,

    /// HTML fragment rendered from the markdown (no page wrapper).
    pub html: String,

    /// Page title built from the first headings.
    pub title: String,

    /// Rendered `index.md` for the static site.
    pub site_fragment: Option<String>,

    /// Rendered standalone HTML page.
    pub page_html: Option<String>,

    /// Rendered stylesheet file.
    pub css: Option<String>,
}

impl ResumeDocument {
    pub fn new(source_path: PathBuf, markdown: String) -> Self {
        Self {
            source_path,
            markdown,
            stylesheet: String::new(),
            html: String::new(),
            title: String::new(),
            site_fragment: None,
            page_html: None,
            css: None,
        }
    }
}
