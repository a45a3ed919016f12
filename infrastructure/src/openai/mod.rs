//! OpenAI-compatible chat completion adapter
//!
//! Implements LlmGateway over `POST {endpoint}/chat/completions`
//! (DeepSeek, OpenAI and compatible servers).

pub mod error;
pub mod gateway;
pub mod protocol;
