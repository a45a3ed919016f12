//! Generation parameters for the question service.
//!
//! [`GenerationConfig`] groups the static parameters that control a
//! generation request in
//! [`FetchQuestionsUseCase`](crate::use_cases::fetch_questions::FetchQuestionsUseCase)
//! and the regeneration budget of the
//! [`QuestionPanel`](crate::use_cases::question_panel::QuestionPanel).

use serde::{Deserialize, Serialize};

/// Generation control parameters.
///
/// All values are static for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Model name sent with every completion request.
    pub model: String,
    /// Token cap for the completion.
    pub max_tokens: u32,
    /// Sampling temperature for the first generation.
    pub temperature: f32,
    /// Sampling temperature for regenerations (higher, for variety).
    pub regeneration_temperature: f32,
    /// Maximum characters of article text sent to the model.
    pub max_input_chars: usize,
    /// Extracted text shorter than this is treated as insufficient.
    pub min_content_chars: usize,
    /// Number of regenerations allowed per panel session.
    pub max_regenerations: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "deepseek-chat".to_string(),
            max_tokens: 1024,
            temperature: 1.3,
            regeneration_temperature: 1.5,
            max_input_chars: 4000,
            min_content_chars: 50,
            max_regenerations: 3,
        }
    }
}

impl GenerationConfig {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_temperatures(mut self, initial: f32, regeneration: f32) -> Self {
        self.temperature = initial;
        self.regeneration_temperature = regeneration;
        self
    }

    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    pub fn with_max_regenerations(mut self, max: u32) -> Self {
        self.max_regenerations = max;
        self
    }

    /// Temperature for a request, by whether it is a regeneration.
    pub fn temperature_for(&self, regeneration: bool) -> f32 {
        if regeneration {
            self.regeneration_temperature
        } else {
            self.temperature
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.model, "deepseek-chat");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.max_input_chars, 4000);
        assert_eq!(config.max_regenerations, 3);
        assert_eq!(config.min_content_chars, 50);
    }

    #[test]
    fn test_regeneration_is_more_random() {
        let config = GenerationConfig::default();
        assert!(config.temperature_for(true) > config.temperature_for(false));
    }

    #[test]
    fn test_builder_chain() {
        let config = GenerationConfig::default()
            .with_model("gpt-4o-mini")
            .with_max_tokens(256)
            .with_temperatures(0.2, 0.9)
            .with_max_input_chars(1000)
            .with_max_regenerations(1);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.temperature_for(false), 0.2);
        assert_eq!(config.temperature_for(true), 0.9);
        assert_eq!(config.max_input_chars, 1000);
        assert_eq!(config.max_regenerations, 1);
    }
}
