//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod diagnostics;
pub mod key_value_store;
pub mod llm_gateway;
pub mod progress;
