//! Error types for the extractor module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for content extraction
///
/// Legitimately empty content is a valid degenerate result, not an error;
/// this only covers parse failures.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// HTML or selector parsing error
    #[error("HTML parsing error: {0}")]
    Parse(String),
}

impl From<ExtractError> for CrateError {
    fn from(err: ExtractError) -> Self {
        CrateError::Extract(err.to_string())
    }
}
