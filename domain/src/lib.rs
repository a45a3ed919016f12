//! Domain layer for critical-thinker
//!
//! This crate contains the core logic: article text extraction, answer
//! parsing, prompt templates and the value objects shared by every layer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Extraction
//!
//! An [`ArticleDocument`] is scanned by an ordered list of
//! [`ExtractionStrategy`] values. The first strategy yielding text wins; the
//! result is whitespace-normalized and windowed around the middle of the
//! article to fit the configured budget.
//!
//! ## Answer parsing
//!
//! A model's free-text reply is turned into question strings by an ordered
//! chain of [`ParseStrategy`] values, evaluated until one succeeds.

pub mod article;
pub mod config;
pub mod core;
pub mod credential;
pub mod prompt;
pub mod questions;
pub mod session;

// Re-export commonly used types
pub use article::{
    document::ArticleDocument,
    extractor::{ARTICLE_SELECTORS, ContentExtractor, ExtractionStrategy, MIN_SELECTOR_CHARS},
    text::{ExtractedText, normalize_whitespace, window_around_middle},
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, string::truncate};
pub use credential::{Credential, PLACEHOLDER_CREDENTIAL};
pub use prompt::QuestionPrompt;
pub use questions::{
    parser::{ParseStrategy, parse_answer, parse_answer_with_strategy},
    question_set::{FALLBACK_QUESTIONS, QUESTION_COUNT, QuestionSet},
};
pub use session::entities::{CompletionRequest, Message, Role};
