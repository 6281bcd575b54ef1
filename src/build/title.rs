//! Page title extraction from rendered HTML.

use scraper::{Html, Selector};

/// Separator placed between the `<h1>` and `<h2>` text.
pub const TITLE_SEPARATOR: &str = " | ";

/// Build a page title from the first `<h1>` and first `<h2>`.
///
/// Uses the text content of each heading with whitespace collapsed. When
/// only one of the two headings exists its text is the whole title; with
/// neither the title is empty.
pub fn extract_title(html: &str) -> String {
    let doc = Html::parse_fragment(html);
    let parts: Vec<String> = ["h1", "h2"]
        .iter()
        .filter_map(|tag| first_text(&doc, tag))
        .collect();

    if parts.is_empty() {
        tracing::warn!("document has no <h1> or <h2>, page title is empty");
    }

    parts.join(TITLE_SEPARATOR)
}

fn first_text(doc: &Html, tag: &str) -> Option<String> {
    let selector = Selector::parse(tag).ok()?;
    let element = doc.select(&selector).next()?;
    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then_some(text)
}
