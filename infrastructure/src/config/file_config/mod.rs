//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod credential;
mod document;
mod generation;
mod logging;
mod output;

pub use api::FileApiConfig;
pub use credential::FileCredentialConfig;
pub use document::FileDocumentConfig;
pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thinker_application::GenerationConfig;
use thinker_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote API settings
    pub api: FileApiConfig,
    /// Question generation settings
    pub generation: FileGenerationConfig,
    /// Credential storage and bundled defaults
    pub credential: FileCredentialConfig,
    /// Document source settings
    pub document: FileDocumentConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.api.endpoint.trim().is_empty() {
            issues.push(ConfigIssue::empty_value("api.endpoint"));
        }
        if self.api.model.trim().is_empty() {
            issues.push(ConfigIssue::empty_value("api.model"));
        }
        issues.extend(self.generation.validate());

        issues
    }

    /// Generation parameters for the question service.
    pub fn generation_config(&self) -> GenerationConfig {
        self.generation.to_generation_config(&self.api.model)
    }
}
