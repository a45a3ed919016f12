//! Logging infrastructure: structured diagnostics.
//!
//! Provides [`JsonlDiagnostics`], a JSONL file writer that implements the
//! [`DiagnosticsSink`](thinker_application::DiagnosticsSink) port.

mod jsonl_diagnostics;

pub use jsonl_diagnostics::JsonlDiagnostics;
