//! Article text extraction.
//!
//! - [`document::ArticleDocument`]: read-only view of the host page
//! - [`extractor::ContentExtractor`]: ordered selector strategies
//! - [`text`]: whitespace normalization and middle-windowing

pub mod document;
pub mod extractor;
pub mod text;
