//! Infrastructure layer for critical-thinker
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod document;
pub mod logging;
pub mod openai;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileApiConfig, FileConfig, FileCredentialConfig, FileDocumentConfig,
    FileGenerationConfig, FileLoggingConfig, FileOutputConfig,
};
pub use document::{
    DocumentError, DocumentLoader, DocumentSource, HtmlDocument, LoadedDocument,
    ROOT_CONTAINER_ID, host_allowed, inject_root_container,
};
pub use logging::JsonlDiagnostics;
pub use openai::{
    error::{OpenAiError, Result},
    gateway::OpenAiGateway,
};
pub use storage::FileKeyValueStore;
