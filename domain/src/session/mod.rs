//! Completion request domain.
//!
//! - [`entities::Message`]: a single chat message
//! - [`entities::CompletionRequest`]: one chat-style completion call

pub mod entities;
