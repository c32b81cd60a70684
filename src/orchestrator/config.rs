//! # Orchestrator Configuration Module
//!
//! This module provides configuration options for the bulk orchestrator,
//! chiefly the bound on simultaneously in-flight per-URL pipelines. It uses
//! a builder pattern for flexible configuration.
//!
//! ## Key Components
//!
//! - `OrchestratorConfig`: The main configuration struct
//! - `OrchestratorConfigBuilder`: Builder pattern implementation for easier configuration
//!
//! ## Features
//!
//! - Explicit, configurable concurrency bound protecting both target sites
//!   and the AI provider from uncontrolled fan-out

/// Configuration for the bulk orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Maximum number of per-URL pipelines in flight at once
    pub max_concurrency: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self { max_concurrency: 4 }
    }
}

/// Builder for OrchestratorConfig
#[derive(Debug, Default)]
pub struct OrchestratorConfigBuilder {
    config: OrchestratorConfig,
}

impl OrchestratorConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: OrchestratorConfig::default(),
        }
    }

    /// Set the maximum number of per-URL pipelines in flight at once
    pub fn max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Build the configuration
    pub fn build(self) -> OrchestratorConfig {
        self.config
    }
}

impl OrchestratorConfig {
    /// Create a new builder
    pub fn builder() -> OrchestratorConfigBuilder {
        OrchestratorConfigBuilder::new()
    }
}
