//! Metadata synthesizer module
//!
//! This module turns extracted page content plus brand context into SEO and
//! social metadata through one AI generation call per URL. The reply is
//! requested as structured JSON and validated field by field; retrying
//! transient provider failures is the orchestrator's job, not this module's.

mod config;
mod error;
mod prompt;

pub use config::{SynthesizerConfig, SynthesizerConfigBuilder};
pub use error::SynthesisError;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::brand::BrandContext;
use crate::extractor::ExtractedContent;
use crate::gemini::Client;
use crate::gemini::prelude::{Content, GenerationConfig};

/// The four metadata fields produced for a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFields {
    /// SEO page title
    pub page_title: String,

    /// SEO meta description
    pub meta_description: String,

    /// Open Graph title
    pub og_title: String,

    /// Open Graph description
    pub og_description: String,
}

/// Raw shape of the model's JSON reply; validated into `MetadataFields`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReply {
    page_title: Option<String>,
    meta_description: Option<String>,
    og_title: Option<String>,
    og_description: Option<String>,
}

/// Synthesizes brand-aware metadata from extracted page content
#[derive(Debug, Clone)]
pub struct MetadataSynthesizer {
    client: Client,
    config: SynthesizerConfig,
}

impl MetadataSynthesizer {
    /// Create a new synthesizer
    pub fn new(client: Client, config: SynthesizerConfig) -> Self {
        Self { client, config }
    }

    /// Generate metadata for one page
    ///
    /// Issues exactly one generation call. Fails with
    /// `SynthesisError::Upstream` on provider transport/rate-limit failure,
    /// `SynthesisError::Parse` if the reply is not well-formed JSON, and
    /// `SynthesisError::MissingFields` if any expected field is absent or
    /// blank.
    #[instrument(skip(self, content, brand), fields(url = content.source_url, brand_id = brand.brand_id))]
    pub async fn synthesize(
        &self,
        content: &ExtractedContent,
        brand: &BrandContext,
    ) -> Result<MetadataFields, SynthesisError> {
        let prompt_text = prompt::build_prompt(content, brand, self.config.max_content_chars);
        debug!(prompt_len = prompt_text.len(), "Requesting metadata");

        let generation_config = GenerationConfig {
            temperature: Some(0.4),
            response_mime_type: Some("application/json".to_string()),
            ..Default::default()
        };

        let response = self
            .client
            .models()
            .generate_content(
                self.config.model.as_str(),
                None,
                vec![Content::new().with_role("user").with_text(prompt_text)],
                Some(generation_config),
            )
            .await?;

        let reply = response.text();
        if reply.is_empty() {
            return Err(SynthesisError::Parse(
                "model reply contained no text".to_string(),
            ));
        }

        parse_reply(&reply)
    }
}

/// Parse and validate the model's JSON reply
fn parse_reply(reply: &str) -> Result<MetadataFields, SynthesisError> {
    let raw: RawReply =
        serde_json::from_str(reply).map_err(|e| SynthesisError::Parse(e.to_string()))?;

    Ok(MetadataFields {
        page_title: required(raw.page_title, "pageTitle")?,
        meta_description: required(raw.meta_description, "metaDescription")?,
        og_title: required(raw.og_title, "ogTitle")?,
        og_description: required(raw.og_description, "ogDescription")?,
    })
}

fn required(value: Option<String>, name: &str) -> Result<String, SynthesisError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SynthesisError::MissingFields(name.to_string()))
}

#[cfg(test)]
impl MetadataSynthesizer {
    /// Point the underlying client at a mock server (for testing only)
    pub fn set_base_url(&mut self, url: String) {
        self.client.set_base_url(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Server, ServerGuard};
    use serde_json::json;

    fn content() -> ExtractedContent {
        ExtractedContent {
            title: "Widgets".to_string(),
            body: "All about widgets.".to_string(),
            source_url: "https://example.com/widgets".to_string(),
        }
    }

    fn brand() -> BrandContext {
        BrandContext {
            brand_id: "acme".to_string(),
            brand_identity: "Hardware retailer".to_string(),
            tone_of_voice: "warm".to_string(),
            guardrails: Default::default(),
            language: "en".to_string(),
            country: "US".to_string(),
        }
    }

    fn synthesizer(server: &ServerGuard) -> MetadataSynthesizer {
        let mut synthesizer = MetadataSynthesizer::new(
            Client::with_api_key("test-key"),
            SynthesizerConfig::default(),
        );
        synthesizer.set_base_url(server.url());
        synthesizer
    }

    fn reply_body(inner: &str) -> String {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": inner }] }
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_synthesize_success() {
        let mut server = Server::new_async().await;
        let inner = json!({
            "pageTitle": "Widgets | Acme",
            "metaDescription": "Warm widgets for warm homes.",
            "ogTitle": "Acme Widgets",
            "ogDescription": "Widgets you can trust."
        })
        .to_string();
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply_body(&inner))
            .create_async()
            .await;

        let fields = synthesizer(&server)
            .synthesize(&content(), &brand())
            .await
            .unwrap();

        assert_eq!(fields.page_title, "Widgets | Acme");
        assert_eq!(fields.og_description, "Widgets you can trust.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_synthesize_malformed_reply_is_parse_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(reply_body("not json at all"))
            .create_async()
            .await;

        let err = synthesizer(&server)
            .synthesize(&content(), &brand())
            .await
            .unwrap_err();

        assert!(matches!(err, SynthesisError::Parse(_)));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_synthesize_missing_field() {
        let mut server = Server::new_async().await;
        let inner = json!({
            "pageTitle": "Widgets | Acme",
            "metaDescription": "Warm widgets.",
            "ogTitle": "Acme Widgets",
            "ogDescription": ""
        })
        .to_string();
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(reply_body(&inner))
            .create_async()
            .await;

        let err = synthesizer(&server)
            .synthesize(&content(), &brand())
            .await
            .unwrap_err();

        match err {
            SynthesisError::MissingFields(field) => assert_eq!(field, "ogDescription"),
            other => panic!("expected missing field error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_synthesize_rate_limit_is_transient_upstream() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .with_body("slow down")
            .create_async()
            .await;

        let err = synthesizer(&server)
            .synthesize(&content(), &brand())
            .await
            .unwrap_err();

        assert!(matches!(err, SynthesisError::Upstream(_)));
        assert!(err.is_transient());
    }

    #[test]
    fn test_parse_reply_rejects_null_field() {
        let reply = json!({
            "pageTitle": "T",
            "metaDescription": "D",
            "ogTitle": null,
            "ogDescription": "OD"
        })
        .to_string();

        let err = parse_reply(&reply).unwrap_err();
        assert!(matches!(err, SynthesisError::MissingFields(f) if f == "ogTitle"));
    }
}
