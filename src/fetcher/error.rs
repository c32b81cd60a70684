//! Error types for the fetcher module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for page fetch operations
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, DNS, timeout, or redirect-loop failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The target responded with a non-2xx status
    #[error("unexpected status {status} fetching {url}")]
    Status {
        /// HTTP status code of the response
        status: u16,
        /// The URL that was requested
        url: String,
    },
}

impl FetchError {
    /// Whether the orchestrator may re-attempt the fetch once
    ///
    /// Only transport failures are considered transient; a bad status code is
    /// terminal on first occurrence.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

impl From<FetchError> for CrateError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Transport(e) => CrateError::Http(e),
            FetchError::Status { .. } => CrateError::Fetch(err.to_string()),
        }
    }
}
