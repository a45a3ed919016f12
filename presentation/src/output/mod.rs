//! Output formatting
//!
//! - [`console::ConsoleFormatter`]: terminal text and JSON
//! - [`panel_html::PanelHtml`]: the panel markup injected into a page

pub mod console;
pub mod panel_html;
