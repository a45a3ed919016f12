//! Document source configuration from TOML (`[document]` section)

use serde::{Deserialize, Serialize};

/// Raw `[document]` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDocumentConfig {
    /// Hosts the panel is meant for; other URLs still load, with a warning
    pub allowed_hosts: Vec<String>,
}

impl Default for FileDocumentConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: vec!["medium.com".to_string()],
        }
    }
}
