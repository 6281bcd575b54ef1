//! Markdown rendering with typographic cleanup.

use pulldown_cmark::{Options, Parser, html};

use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum MarkdownError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),
}

/// Render markdown to HTML using pulldown-cmark.
///
/// Smart punctuation is always enabled: straight quotes become curly,
/// `--` and `---` become en and em dashes, `...` becomes an ellipsis.
pub fn render_markdown(
    markdown: &str,
    markdown_config: &MarkdownConfig,
) -> Result<String, MarkdownError> {
    let options = parser_options(markdown_config)?;
    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);

    Ok(html_output)
}

fn parser_options(markdown_config: &MarkdownConfig) -> Result<Options, MarkdownError> {
    let mut options = Options::ENABLE_SMART_PUNCTUATION;
    for extension in &markdown_config.extensions {
        match extension.as_str() {
            "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "gfm" => options.insert(Options::ENABLE_GFM),
            "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
            "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "tables" => options.insert(Options::ENABLE_TABLES),
            "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
            other => return Err(MarkdownError::InvalidExtension(other.to_string())),
        }
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = render_markdown("# Hello\n\nWorld", &MarkdownConfig::default()).unwrap();
        assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
    }

    #[test]
    fn test_smart_punctuation() {
        let html = render_markdown(
            "\"Quoted\" text -- it's 2010---2014...",
            &MarkdownConfig::default(),
        )
        .unwrap();

        assert!(html.contains('\u{201c}'), "opening quote: {html}");
        assert!(html.contains('\u{201d}'), "closing quote: {html}");
        assert!(html.contains('\u{2019}'), "apostrophe: {html}");
        assert!(html.contains('\u{2013}'), "en dash: {html}");
        assert!(html.contains('\u{2014}'), "em dash: {html}");
        assert!(html.contains('\u{2026}'), "ellipsis: {html}");
        assert!(!html.contains("--"));
    }

    #[test]
    fn test_smart_punctuation_skips_code() {
        let html = render_markdown("`a -- b`", &MarkdownConfig::default()).unwrap();
        assert!(html.contains("<code>a -- b</code>"));
    }

    #[test]
    fn test_tables_enabled_by_default() {
        let html = render_markdown(
            "| Year | Role |\n|---|---|\n| 2020 | Engineer |",
            &MarkdownConfig::default(),
        )
        .unwrap();
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Engineer</td>"));
    }

    #[test]
    fn test_extensions_can_be_disabled() {
        let config = MarkdownConfig { extensions: vec![] };
        let html = render_markdown("| a |\n|---|\n| b |", &config).unwrap();
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_heading_attributes() {
        let html = render_markdown("## Experience {#work}", &MarkdownConfig::default()).unwrap();
        assert!(html.contains(r#"<h2 id="work">Experience</h2>"#));
    }

    #[test]
    fn test_invalid_extension() {
        let config = MarkdownConfig {
            extensions: vec!["not_a_real_extension".to_string()],
        };

        let result = render_markdown("# Test", &config);
        assert!(matches!(
            result,
            Err(MarkdownError::InvalidExtension(ext)) if ext == "not_a_real_extension"
        ));
    }
}
