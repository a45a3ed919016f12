//! Presentation layer for critical-thinker
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive question panel.

pub mod cli;
pub mod config;
pub mod output;
pub mod panel;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, KeyAction, OutputArg};
pub use config::{OutputConfig, PanelConfig};
pub use output::console::ConsoleFormatter;
pub use output::panel_html::PanelHtml;
pub use panel::{PanelCommand, PanelRepl};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
