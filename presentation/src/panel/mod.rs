//! Interactive question panel

pub mod repl;

pub use repl::{PanelCommand, PanelRepl};
