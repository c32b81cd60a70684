//! Client implementation for the Gemini API
//!
//! This module provides the main entry point for interacting with the
//! Gemini API.

use crate::gemini::http::HttpClient;
use crate::gemini::models::ModelsService;

/// Client for the Gemini API
#[derive(Debug, Clone)]
pub struct Client {
    http_client: HttpClient,
}

impl Client {
    /// Create a new client with an API key for the Gemini Developer API
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::with_api_key(api_key.into()),
        }
    }

    /// Access the models service
    pub fn models(&self) -> ModelsService {
        ModelsService::new(self.http_client.clone())
    }
}

#[cfg(test)]
impl Client {
    /// Point the client at a mock server (for testing only)
    pub fn set_base_url(&mut self, url: String) {
        self.http_client.set_base_url(url);
    }
}
