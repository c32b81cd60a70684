//! Type definitions for the Gemini API
//!
//! This module contains the data structures for content generation requests
//! and responses.

use serde::{Deserialize, Serialize};

/// Content represents a piece of content that can be processed by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// The role of the content (e.g., "user", "model")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// The parts that make up this content
    pub parts: Vec<Part>,
}

impl Default for Content {
    fn default() -> Self {
        Self::new()
    }
}

impl Content {
    /// Create a new empty content
    pub fn new() -> Self {
        Self {
            role: None,
            parts: Vec::new(),
        }
    }

    /// Set the role for this content
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Add text to this content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text(text.into()));
        self
    }
}

/// A part of content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Part {
    /// Text content
    #[serde(rename = "text")]
    Text(String),
}

/// Generation configuration for content generation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum number of output tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,

    /// MIME type of the response, e.g. "application/json" for structured
    /// replies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

/// Response from a content generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A generation candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// The candidate's content
    pub content: Content,

    /// Why generation stopped, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| match part {
                        Part::Text(text) => text.as_str(),
                    })
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_builder() {
        let content = Content::new().with_role("user").with_text("hello");

        assert_eq!(content.role.as_deref(), Some("user"));
        assert_eq!(content.parts.len(), 1);
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content::new().with_text("foo").with_text("bar"),
                finish_reason: None,
            }],
        };

        assert_eq!(response.text(), "foobar");
    }

    #[test]
    fn test_response_text_empty_when_no_candidates() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert_eq!(response.text(), "");
    }
}
