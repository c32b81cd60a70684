//! # Synthesizer Configuration Module
//!
//! This module provides configuration options for the metadata synthesizer,
//! covering model selection and the content size bound sent to the provider.
//! It uses a builder pattern for flexible configuration.
//!
//! ## Key Components
//!
//! - `SynthesizerConfig`: The main configuration struct
//! - `SynthesizerConfigBuilder`: Builder pattern implementation for easier configuration
//!
//! ## Features
//!
//! - Model selection for the generation call
//! - Character cap on page content to bound provider cost and avoid
//!   oversized-request rejection

/// Configuration for the metadata synthesizer
#[derive(Debug, Clone)]
pub struct SynthesizerConfig {
    /// Model to use for metadata generation
    pub model: String,

    /// Maximum number of content characters sent to the provider
    pub max_content_chars: usize,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            max_content_chars: 6000,
        }
    }
}

/// Builder for SynthesizerConfig
#[derive(Debug, Default)]
pub struct SynthesizerConfigBuilder {
    config: SynthesizerConfig,
}

impl SynthesizerConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: SynthesizerConfig::default(),
        }
    }

    /// Set the model to use for metadata generation
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the maximum number of content characters sent to the provider
    pub fn max_content_chars(mut self, max_content_chars: usize) -> Self {
        self.config.max_content_chars = max_content_chars;
        self
    }

    /// Build the configuration
    pub fn build(self) -> SynthesizerConfig {
        self.config
    }
}

impl SynthesizerConfig {
    /// Create a new builder
    pub fn builder() -> SynthesizerConfigBuilder {
        SynthesizerConfigBuilder::new()
    }
}
