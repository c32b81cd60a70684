//! Gemini API implementation
//!
//! This module provides the client used for AI text generation. It is trimmed
//! to content generation: the synthesizer issues exactly one
//! `generateContent` call per URL and parses a structured JSON reply.

mod client;
mod http;
mod models;
mod types;

pub use client::Client;

/// Re-export of types module for public use
pub mod prelude {
    pub use super::types::*;
    pub use crate::error::Error;
    pub use crate::error::Result;
}
