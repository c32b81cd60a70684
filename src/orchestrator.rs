//! Bulk orchestrator module
//!
//! This module fans a batch of URLs through fetch, extraction, and synthesis,
//! isolating per-URL failures and assembling an order-preserving result list.
//! One bad URL never aborts the batch; only request-level validation or brand
//! lookup failures do.

mod config;
mod error;

pub use config::{OrchestratorConfig, OrchestratorConfigBuilder};
pub use error::{BatchError, PipelineError, ValidationError};

use std::sync::Arc;

use futures::future;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::brand::{BrandContext, BrandContextProvider};
use crate::extractor::extract_content;
use crate::fetcher::Fetcher;
use crate::synthesizer::{MetadataFields, MetadataSynthesizer};

/// A request to generate metadata for one or more URLs of a brand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBatchRequest {
    /// Identifier of the brand the pages belong to
    pub brand_id: String,

    /// Candidate page URLs, in the order results must come back
    pub urls: Vec<String>,

    /// Whether to process all URLs or only the single requested one
    pub is_bulk: bool,
}

/// The batch response: exactly one result per requested URL, in request order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataBatchResponse {
    /// Per-URL outcomes, positionally matching the request's `urls`
    pub results: Vec<MetadataResult>,
}

/// Outcome status of one URL's pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    /// All four metadata fields were generated
    Success,
    /// The pipeline failed; `error` carries the reason
    Error,
}

/// Per-URL outcome of the metadata pipeline
///
/// On success all four text fields are populated and `error` is null; on
/// error the text fields are absent and `error` is set. The constructors are
/// the only way these combinations are produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResult {
    /// The requested URL this result corresponds to
    pub url: String,

    /// Generated SEO page title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    /// Generated SEO meta description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Generated Open Graph title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,

    /// Generated Open Graph description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,

    /// Whether the pipeline succeeded for this URL
    pub status: ResultStatus,

    /// Failure reason when `status` is `error`
    pub error: Option<String>,
}

impl MetadataResult {
    /// Build a success result from synthesized fields
    pub fn success(url: impl Into<String>, fields: MetadataFields) -> Self {
        Self {
            url: url.into(),
            page_title: Some(fields.page_title),
            meta_description: Some(fields.meta_description),
            og_title: Some(fields.og_title),
            og_description: Some(fields.og_description),
            status: ResultStatus::Success,
            error: None,
        }
    }

    /// Build an error result carrying the failure reason
    pub fn error(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            page_title: None,
            meta_description: None,
            og_title: None,
            og_description: None,
            status: ResultStatus::Error,
            error: Some(message.into()),
        }
    }

    /// Whether this result carries generated metadata
    pub fn is_success(&self) -> bool {
        self.status == ResultStatus::Success
    }
}

/// Runs metadata batches end to end
///
/// Shares one fetcher and one synthesizer across all per-URL pipelines; both
/// tolerate concurrent use.
pub struct BulkOrchestrator {
    fetcher: Fetcher,
    synthesizer: MetadataSynthesizer,
    brands: Arc<dyn BrandContextProvider>,
    config: OrchestratorConfig,
}

impl BulkOrchestrator {
    /// Create a new orchestrator
    pub fn new(
        fetcher: Fetcher,
        synthesizer: MetadataSynthesizer,
        brands: Arc<dyn BrandContextProvider>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            fetcher,
            synthesizer,
            brands,
            config,
        }
    }

    /// Process a metadata batch
    ///
    /// Validates the request and resolves the brand before any network
    /// activity; either failing aborts the whole batch. Afterwards each URL
    /// runs its own fetch → extract → synthesize pipeline under a bounded
    /// concurrency gate, and any per-URL failure becomes that URL's error
    /// result without touching its siblings. `results[i]` always corresponds
    /// to `urls[i]`, whatever order the pipelines complete in.
    ///
    /// All pipelines run inside this future: dropping it (or racing it
    /// against a timeout) cancels every in-flight fetch and generation call,
    /// and no partial response is produced.
    #[instrument(skip(self, request), fields(brand_id = %request.brand_id, url_count = request.urls.len(), is_bulk = request.is_bulk))]
    pub async fn process(
        &self,
        request: MetadataBatchRequest,
    ) -> Result<MetadataBatchResponse, BatchError> {
        validate(&request)?;

        let brand = self
            .brands
            .brand_context(&request.brand_id)
            .await
            .map_err(|e| BatchError::BrandLookup(e.to_string()))?;

        // Single mode resolves exactly the one requested URL.
        let urls: &[String] = if request.is_bulk {
            &request.urls
        } else {
            &request.urls[..1]
        };

        info!(count = urls.len(), "Processing metadata batch");

        let semaphore = Semaphore::new(self.config.max_concurrency);

        let tasks = urls.iter().map(|url| {
            let semaphore = &semaphore;
            let brand = &brand;
            async move {
                let _permit = match semaphore.acquire().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        return MetadataResult::error(
                            url,
                            format!("concurrency gate closed: {}", e),
                        );
                    }
                };
                self.resolve_url(url, brand).await
            }
        });

        // join_all keeps task order, so slot i is urls[i] regardless of
        // completion order.
        let results = future::join_all(tasks).await;

        Ok(MetadataBatchResponse { results })
    }

    /// Run one URL's pipeline, converting any failure into an error result
    async fn resolve_url(&self, url: &str, brand: &BrandContext) -> MetadataResult {
        match self.run_pipeline(url, brand).await {
            Ok(fields) => MetadataResult::success(url, fields),
            Err(err) => {
                warn!(url, error = %err, "URL pipeline failed");
                MetadataResult::error(url, err.to_string())
            }
        }
    }

    /// Fetch, extract, and synthesize for one URL
    ///
    /// Transient failures (fetch transport, synthesis upstream) get exactly
    /// one re-attempt; every other error class is terminal on first
    /// occurrence.
    async fn run_pipeline(
        &self,
        url: &str,
        brand: &BrandContext,
    ) -> Result<MetadataFields, PipelineError> {
        debug!(url, "Fetching page");
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(err) if err.is_transient() => {
                debug!(url, error = %err, "Transient fetch failure, retrying once");
                self.fetcher.fetch(url).await?
            }
            Err(err) => return Err(err.into()),
        };

        debug!(url, "Extracting content");
        let content = extract_content(&page.html, &page.final_url)?;

        debug!(url, "Synthesizing metadata");
        let fields = match self.synthesizer.synthesize(&content, brand).await {
            Ok(fields) => fields,
            Err(err) if err.is_transient() => {
                debug!(url, error = %err, "Transient synthesis failure, retrying once");
                self.synthesizer.synthesize(&content, brand).await?
            }
            Err(err) => return Err(err.into()),
        };

        Ok(fields)
    }
}

/// Validate the request before any network activity
fn validate(request: &MetadataBatchRequest) -> Result<(), ValidationError> {
    if request.brand_id.trim().is_empty() {
        return Err(ValidationError::MissingBrand);
    }
    if request.urls.is_empty() {
        return Err(ValidationError::NoUrls);
    }
    for (index, url) in request.urls.iter().enumerate() {
        if url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl { index });
        }
        let parsed = Url::parse(url).map_err(|e| ValidationError::InvalidUrl {
            index,
            reason: e.to_string(),
        })?;
        if !parsed.has_host() {
            return Err(ValidationError::InvalidUrl {
                index,
                reason: "missing host".to_string(),
            });
        }
    }
    Ok(())
}
