//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw `[logging]` configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Append human-readable logs to this file
    pub file: Option<PathBuf>,
    /// Append JSONL diagnostics for failed generations to this file
    pub diagnostics_file: Option<PathBuf>,
}
