//! Brand context types and lookup
//!
//! Brand records are owned by an external brand-management subsystem; this
//! module only defines the read-only context the synthesizer consumes and the
//! lookup seam the orchestrator resolves it through.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Brand voice and locale data used to personalize generated metadata
///
/// Immutable for the duration of a batch; per-URL pipelines share one
/// instance by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandContext {
    /// Identifier of the brand record
    pub brand_id: String,

    /// Short description of who the brand is
    pub brand_identity: String,

    /// Tone-of-voice instructions for generated copy
    pub tone_of_voice: String,

    /// Content constraints (forbidden words/topics) for the generation call
    pub guardrails: BTreeSet<String>,

    /// Output language, e.g. "en"
    pub language: String,

    /// Target market country, e.g. "US"
    pub country: String,
}

/// Lookup seam for brand context, keyed by brand id
#[async_trait]
pub trait BrandContextProvider: Send + Sync {
    /// Resolve the context for a brand id
    async fn brand_context(&self, brand_id: &str) -> Result<BrandContext>;
}

/// In-memory brand provider for embedding and tests
#[derive(Debug, Default)]
pub struct InMemoryBrandProvider {
    brands: BTreeMap<String, BrandContext>,
}

impl InMemoryBrandProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a brand, keyed by its `brand_id`
    pub fn insert(&mut self, brand: BrandContext) {
        self.brands.insert(brand.brand_id.clone(), brand);
    }
}

#[async_trait]
impl BrandContextProvider for InMemoryBrandProvider {
    async fn brand_context(&self, brand_id: &str) -> Result<BrandContext> {
        self.brands
            .get(brand_id)
            .cloned()
            .ok_or_else(|| Error::InvalidRequest(format!("unknown brand id: {}", brand_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> BrandContext {
        BrandContext {
            brand_id: "acme".to_string(),
            brand_identity: "Hardware retailer".to_string(),
            tone_of_voice: "warm".to_string(),
            guardrails: ["no superlatives".to_string()].into_iter().collect(),
            language: "en".to_string(),
            country: "US".to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_known_brand() {
        let mut provider = InMemoryBrandProvider::new();
        provider.insert(acme());

        let brand = provider.brand_context("acme").await.unwrap();
        assert_eq!(brand.brand_identity, "Hardware retailer");
    }

    #[tokio::test]
    async fn test_lookup_unknown_brand() {
        let provider = InMemoryBrandProvider::new();
        let err = provider.brand_context("missing").await.unwrap_err();
        assert!(err.to_string().contains("unknown brand id"));
    }

    #[test]
    fn test_brand_context_serde_shape() {
        let json = serde_json::to_value(acme()).unwrap();
        assert_eq!(json["brandId"], "acme");
        assert_eq!(json["toneOfVoice"], "warm");
    }
}
