//! Prompt construction for metadata generation

use crate::brand::BrandContext;
use crate::extractor::ExtractedContent;

/// Build the generation prompt for one page
///
/// Combines the extracted title and (size-bounded) body with the brand's
/// voice and locale. Content over the cap is cut to exactly `max_chars`
/// characters, keeping the leading text.
pub(crate) fn build_prompt(
    content: &ExtractedContent,
    brand: &BrandContext,
    max_chars: usize,
) -> String {
    let body = truncate_chars(&content.body, max_chars);

    let guardrails = if brand.guardrails.is_empty() {
        "none".to_string()
    } else {
        brand
            .guardrails
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    };

    format!(
        "Generate SEO and social metadata for the webpage below, written in the brand's voice.\n\n\
        Brand identity: {}\n\
        Tone of voice: {}\n\
        Guardrails: {}\n\
        Language: {}\n\
        Country: {}\n\n\
        Source URL: {}\n\
        Page title: {}\n\
        Page content:\n{}\n\n\
        Respond with a single JSON object containing exactly these keys: \
        \"pageTitle\", \"metaDescription\", \"ogTitle\", \"ogDescription\". \
        Every value must be a non-empty string.",
        brand.brand_identity,
        brand.tone_of_voice,
        guardrails,
        brand.language,
        brand.country,
        content.source_url,
        content.title,
        body,
    )
}

/// Cut text to at most `cap` characters, keeping the leading ones
pub(crate) fn truncate_chars(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
