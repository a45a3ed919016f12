//! Presentation-level configuration
//!
//! Configuration for output formatting and panel behavior.

use std::path::PathBuf;
use thinker_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format for one-shot runs
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Interactive panel configuration
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Show a spinner while generating
    pub show_progress: bool,
    /// Path to the command history file
    pub history_file: Option<PathBuf>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: dirs::data_dir()
                .map(|p| p.join("critical-thinker").join("panel_history.txt")),
        }
    }
}
