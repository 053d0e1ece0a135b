//! SEO metadata extraction from a fetched page.
//!
//! Pulls the first `<h1>`, the first `<title>` and the first
//! `<meta name="description">` content. Each field is looked up on its own, so
//! a missing tag never hides the others. The HTML5 parser recovers from any
//! malformed input, so extraction cannot fail.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tag values extracted from a page. `None` means the tag was not present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub h1: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Extract h1, title and meta description from an HTML document
pub fn extract(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let metadata = PageMetadata {
        h1: first_text(&document, "h1"),
        title: first_text(&document, "title"),
        description: first_attr(&document, r#"meta[name="description"]"#, "content"),
    };

    debug!(
        h1 = metadata.h1.as_deref().unwrap_or_default(),
        title = metadata.title.as_deref().unwrap_or_default(),
        description = metadata.description.as_deref().unwrap_or_default(),
        "Extracted page metadata"
    );

    metadata
}

/// Trimmed text of the first element matching `selector`
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// Trimmed attribute of the first element matching `selector`
fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()?
        .value()
        .attr(attr)
        .map(|value| value.trim().to_string())
}
