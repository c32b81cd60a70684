//! Fixed removal set and content selector fallback chain

use scraper::node::Element;

/// Elements that never carry page content
pub(crate) const REMOVED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "iframe", "nav", "header", "footer",
];

/// Class tokens marking ad, comment, and social-share blocks
pub(crate) const REMOVED_CLASSES: &[&str] = &[
    "ad",
    "ads",
    "advert",
    "advertisement",
    "adsbygoogle",
    "comment",
    "comments",
    "comment-section",
    "social",
    "social-share",
    "share",
    "sharing",
    "share-buttons",
];

/// Structural selectors tried in priority order for the main content
///
/// The first selector whose filtered text is non-empty wins; if none match,
/// extraction falls back to the full body text.
pub(crate) const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role=\"main\"]",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".content",
    "main",
];

/// Whether an element and its subtree are excluded from extracted text
pub(crate) fn is_removed(element: &Element) -> bool {
    if REMOVED_ELEMENTS.contains(&element.name()) {
        return true;
    }
    element
        .classes()
        .any(|class| REMOVED_CLASSES.contains(&class.to_ascii_lowercase().as_str()))
}
