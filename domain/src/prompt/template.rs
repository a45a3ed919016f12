//! Prompt templates for question generation

use crate::questions::question_set::QuestionSet;

/// Templates for the system instructions and user prompts
pub struct QuestionPrompt;

impl QuestionPrompt {
    /// Fixed system instructions for every generation request
    pub fn system() -> &'static str {
        "Generate exactly 3 concise bullet-point critical thinking questions based on the article. \
Each question should be 10-15 words maximum. Use only plain text with no markdown formatting \
(no bold, italic, etc). Use simple bullet points with '-' or '*' only."
    }

    /// User prompt for the first generation
    pub fn initial(article: &str) -> String {
        format!(
            r#"Here is part of a Medium article:

{}

Generate exactly 3 brief thought-provoking questions about this content in simple bullet-point format. Keep each question under 15 words. Don't use any markdown formatting - just plain text with bullet points."#,
            article
        )
    }

    /// User prompt for a regeneration, listing the questions to avoid
    pub fn regeneration(article: &str, previous: &QuestionSet) -> String {
        let previous_lines = previous
            .iter()
            .map(|q| format!("- {}", q))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"Here is part of a Medium article:

{}

Previously, I generated these questions:
{}

Generate 3 NEW thought-provoking questions about this content that are DIFFERENT from the previous ones. Focus on different aspects, angles, or themes to reduce repetition. Keep each question under 15 words. Use simple bullet points with '-' or '*' only."#,
            article, previous_lines
        )
    }

    /// User prompt picked by whether previous questions exist
    pub fn for_request(article: &str, previous: Option<&QuestionSet>) -> String {
        match previous {
            Some(previous) if !previous.is_empty() => Self::regeneration(article, previous),
            _ => Self::initial(article),
        }
    }

    /// System prompt for the connection check
    pub fn connection_check_system() -> &'static str {
        "You are a helpful assistant who responds very briefly."
    }

    /// User prompt for the connection check
    pub fn connection_check() -> &'static str {
        "Respond with a simple 'Hello, API connection successful!' (under 10 words)"
    }
}
