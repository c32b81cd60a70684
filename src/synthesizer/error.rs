//! Error types for the synthesizer module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for metadata synthesis
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Transport, timeout, or rate-limit failure of the generation call
    #[error("AI provider error: {0}")]
    Upstream(String),

    /// The reply was not well-formed
    #[error("malformed AI reply: {0}")]
    Parse(String),

    /// The reply lacked one of the expected metadata fields
    #[error("AI reply is missing field '{0}'")]
    MissingFields(String),
}

impl SynthesisError {
    /// Whether the orchestrator may re-attempt the call once
    ///
    /// Only upstream failures are transient; a malformed or incomplete reply
    /// is terminal on first occurrence.
    pub fn is_transient(&self) -> bool {
        matches!(self, SynthesisError::Upstream(_))
    }
}

impl From<CrateError> for SynthesisError {
    fn from(err: CrateError) -> Self {
        match err {
            // The generation call succeeded but the reply envelope did not
            // deserialize; that is a parse failure, not an upstream one.
            CrateError::UnexpectedResponse(msg) => SynthesisError::Parse(msg),
            other => SynthesisError::Upstream(other.to_string()),
        }
    }
}

impl From<SynthesisError> for CrateError {
    fn from(err: SynthesisError) -> Self {
        CrateError::Synthesis(err.to_string())
    }
}
