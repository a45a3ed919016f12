//! Port for structured diagnostics.
//!
//! Defines the [`DiagnosticsSink`] trait for recording why a generation
//! failed (extraction, credential, remote call, parse) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable messages, while this port captures machine-readable
//! records (JSONL). Payloads never contain the credential.

use serde_json::Value;

/// A structured diagnostic event.
pub struct DiagnosticEvent {
    /// Event type identifier (e.g., "generation_failed", "connection_check").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DiagnosticEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording diagnostic events.
///
/// `record` is synchronous and non-fallible; sink failures are ignored.
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, event: DiagnosticEvent);
}

/// No-op implementation for tests and when diagnostics are disabled.
pub struct NoDiagnostics;

impl DiagnosticsSink for NoDiagnostics {
    fn record(&self, _event: DiagnosticEvent) {}
}
