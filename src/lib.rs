//! # Metasmith - Brand-Aware SEO Metadata Generation
//!
//! This crate resolves SEO and social metadata for brand webpages. Given a
//! batch of candidate URLs it fetches each page, extracts its meaningful
//! textual content, and asks an AI text-generation model to synthesize a page
//! title, meta description, and Open Graph title/description tuned to the
//! brand's tone of voice and guardrails.
//!
//! ## Features
//!
//! - Single-shot page fetching with redirect caps and bounded timeouts
//! - Boilerplate-stripping content extraction with an ordered selector
//!   fallback chain
//! - Brand-aware metadata synthesis through the Gemini API
//! - Bulk orchestration with bounded concurrency and per-URL failure
//!   isolation: one bad URL never aborts the batch
//! - Async API with Tokio
//! - Robust error handling and logging
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use metasmith::brand::{BrandContext, InMemoryBrandProvider};
//! use metasmith::fetcher::{Fetcher, FetcherConfig};
//! use metasmith::gemini::Client;
//! use metasmith::orchestrator::{
//!     BulkOrchestrator, MetadataBatchRequest, OrchestratorConfig,
//! };
//! use metasmith::synthesizer::{MetadataSynthesizer, SynthesizerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut brands = InMemoryBrandProvider::new();
//!     brands.insert(BrandContext {
//!         brand_id: "acme".to_string(),
//!         brand_identity: "Playful hardware retailer".to_string(),
//!         tone_of_voice: "warm, direct".to_string(),
//!         guardrails: ["no superlatives".to_string()].into_iter().collect(),
//!         language: "en".to_string(),
//!         country: "US".to_string(),
//!     });
//!
//!     let fetcher = Fetcher::new(FetcherConfig::default())?;
//!     let synthesizer = MetadataSynthesizer::new(
//!         Client::with_api_key("your-api-key"),
//!         SynthesizerConfig::default(),
//!     );
//!     let orchestrator = BulkOrchestrator::new(
//!         fetcher,
//!         synthesizer,
//!         Arc::new(brands),
//!         OrchestratorConfig::default(),
//!     );
//!
//!     let response = orchestrator
//!         .process(MetadataBatchRequest {
//!             brand_id: "acme".to_string(),
//!             urls: vec!["https://example.com/landing".to_string()],
//!             is_bulk: false,
//!         })
//!         .await?;
//!
//!     for result in response.results {
//!         println!("{}: {:?}", result.url, result.page_title);
//!     }
//!     Ok(())
//! }
//! ```

mod error;

pub mod brand;
pub mod extractor;
pub mod fetcher;
pub mod gemini;
pub mod orchestrator;
pub mod synthesizer;

pub use error::Error;

/// Re-export of commonly used types
pub mod prelude {
    pub use crate::brand::{BrandContext, BrandContextProvider};
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::orchestrator::{
        BulkOrchestrator, MetadataBatchRequest, MetadataBatchResponse, MetadataResult,
        ResultStatus,
    };
}
