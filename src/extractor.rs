//! Content extraction module
//!
//! This module turns raw HTML into normalized title and body text. It strips
//! non-content markup (scripts, chrome, ad/comment/social blocks) and resolves
//! the main content through an ordered selector fallback chain. Extraction is
//! pure CPU work: the same HTML always yields the same output.

mod error;
mod selectors;

pub use error::ExtractError;

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use selectors::{CONTENT_SELECTORS, is_removed};

/// Normalized text content of a fetched page
///
/// Request-scoped; discarded once metadata has been synthesized from it.
#[derive(Debug, Clone)]
pub struct ExtractedContent {
    /// Resolved page title (first `<h1>`, else the document title)
    pub title: String,

    /// Main body text with whitespace collapsed
    pub body: String,

    /// The URL the content was extracted from
    pub source_url: String,
}

/// Extract normalized title and body text from raw HTML
///
/// Empty title or body is a valid degenerate result for pages with no
/// recognizable content; only parse failures are errors.
pub fn extract_content(html: &str, source_url: &str) -> Result<ExtractedContent, ExtractError> {
    let document = Html::parse_document(html);

    let title = resolve_title(&document)?;
    let body = resolve_body(&document)?;

    trace!(
        source_url,
        title_len = title.len(),
        body_len = body.len(),
        "Extracted content"
    );

    Ok(ExtractedContent {
        title,
        body,
        source_url: source_url.to_string(),
    })
}

/// Resolve the page title: first `<h1>` text, else the `<title>` element
fn resolve_title(document: &Html) -> Result<String, ExtractError> {
    let h1 = parse_selector("h1")?;
    if let Some(element) = document.select(&h1).next() {
        let text = element_text(element);
        if !text.is_empty() {
            return Ok(text);
        }
    }

    let title = parse_selector("title")?;
    Ok(document
        .select(&title)
        .next()
        .map(element_text)
        .unwrap_or_default())
}

/// Resolve the main body text through the selector fallback chain
fn resolve_body(document: &Html) -> Result<String, ExtractError> {
    for selector_str in CONTENT_SELECTORS {
        let selector = parse_selector(selector_str)?;
        if let Some(element) = document.select(&selector).next() {
            let text = element_text(element);
            if !text.is_empty() {
                trace!(selector = selector_str, "Content selector matched");
                return Ok(text);
            }
        }
    }

    // No structural container matched; fall back to the full body text.
    let body = parse_selector("body")?;
    Ok(document
        .select(&body)
        .next()
        .map(element_text)
        .unwrap_or_default())
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector)
        .map_err(|e| ExtractError::Parse(format!("failed to parse selector '{}': {}", selector, e)))
}

/// Collect an element's text, skipping removed subtrees, and normalize it
fn element_text(element: ElementRef) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);
    normalize_whitespace(&raw)
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !is_removed(child_element.value()) {
                collect_text(child_element, out);
            }
        }
    }
}

/// Collapse whitespace runs to a single space and trim the ends
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
