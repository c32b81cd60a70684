//! Models service for the Gemini API
//!
//! This module provides content generation against Gemini models.

use crate::error::Result;
use crate::gemini::http::HttpClient;
use crate::gemini::types::{Content, GenerateContentResponse, GenerationConfig};
use serde::Serialize;
use tracing::{debug, instrument};

/// Request for generating content
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    /// The contents to generate from
    contents: Vec<Content>,

    /// Generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,

    /// The system prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

/// Service for interacting with Gemini models
#[derive(Debug, Clone)]
pub struct ModelsService {
    /// HTTP client for making API requests
    http_client: HttpClient,
}

impl ModelsService {
    /// Create a new models service
    pub(crate) fn new(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Generate content from a model
    #[instrument(skip(self, system_instruction, contents, config), level = "debug")]
    pub async fn generate_content(
        &self,
        model: impl Into<String> + std::fmt::Debug,
        system_instruction: Option<Content>,
        contents: Vec<Content>,
        config: Option<GenerationConfig>,
    ) -> Result<GenerateContentResponse> {
        let model = model.into();

        let request = GenerateContentRequest {
            contents,
            generation_config: config,
            system_instruction,
        };

        let path = format!("models/{}:generateContent", model);
        debug!("Generating content with model {}", model);

        self.http_client.post(&path, &request).await
    }
}
