//! Error types for the orchestrator module

use crate::error::Error as CrateError;
use crate::extractor::ExtractError;
use crate::fetcher::FetchError;
use crate::synthesizer::SynthesisError;
use thiserror::Error;

/// Request-level validation error
///
/// Any of these aborts the whole batch before network activity begins.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The request carried no brand id
    #[error("brand id is required")]
    MissingBrand,

    /// The request carried no URLs
    #[error("at least one url is required")]
    NoUrls,

    /// A requested URL was empty
    #[error("url at index {index} is empty")]
    EmptyUrl {
        /// Position of the offending URL in the request
        index: usize,
    },

    /// A requested URL was not a valid absolute URL
    #[error("url at index {index} is not a valid absolute url: {reason}")]
    InvalidUrl {
        /// Position of the offending URL in the request
        index: usize,
        /// Why parsing rejected it
        reason: String,
    },
}

/// Whole-batch failure
///
/// Per-URL pipeline failures never surface here; they land in the matching
/// `MetadataResult` instead.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The request failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The brand context could not be resolved
    #[error("brand lookup failed: {0}")]
    BrandLookup(String),
}

/// Failure of a single URL's pipeline, tagged by stage
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The page fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Content extraction failed
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// Metadata synthesis failed
    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

impl From<ValidationError> for CrateError {
    fn from(err: ValidationError) -> Self {
        CrateError::Validation(err.to_string())
    }
}

impl From<BatchError> for CrateError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::Validation(e) => e.into(),
            BatchError::BrandLookup(msg) => CrateError::InvalidRequest(msg),
        }
    }
}
