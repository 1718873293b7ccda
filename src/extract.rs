//! Paragraph text extraction.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("static selector"));

/// Concatenate the text of every `<p>` element, in document order.
///
/// Paragraphs are joined with a single space; whitespace-only paragraphs are
/// dropped. Input without paragraphs (including empty or garbage input)
/// yields an empty string.
pub fn extract_paragraph_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let document = Html::parse_document(html);
    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .filter(|text| !text.trim().is_empty())
        .collect();
    debug!(count = paragraphs.len(), "Extracted paragraphs");
    paragraphs.join(" ")
}
