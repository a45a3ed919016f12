//! Prompt domain
//!
//! Fixed instructions and user prompts for question generation.

mod template;

pub use template::QuestionPrompt;
