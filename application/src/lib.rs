//! Application layer for critical-thinker
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BundledCredential, GenerationConfig};
pub use ports::{
    diagnostics::{DiagnosticEvent, DiagnosticsSink, NoDiagnostics},
    key_value_store::{KeyValueStore, StoreError},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{GenerationStep, NoProgress, ProgressNotifier},
};
pub use use_cases::check_connection::{CheckConnectionUseCase, ConnectionReport};
pub use use_cases::fetch_questions::{
    DocumentQuestions, FetchQuestionsError, FetchQuestionsUseCase,
};
pub use use_cases::key_store::{CREDENTIAL_STORAGE_KEY, KeyStore, KeyStoreError};
pub use use_cases::question_panel::{PanelError, PanelOutcome, QuestionPanel, QuestionSource};
