//! Generation configuration from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};
use thinker_application::GenerationConfig;
use thinker_domain::{ConfigIssue, Severity};

const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

/// Raw `[generation]` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub max_tokens: u32,
    pub temperature: f32,
    pub regeneration_temperature: f32,
    pub max_input_chars: usize,
    pub max_regenerations: u32,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let defaults = GenerationConfig::default();
        Self {
            max_tokens: defaults.max_tokens,
            temperature: defaults.temperature,
            regeneration_temperature: defaults.regeneration_temperature,
            max_input_chars: defaults.max_input_chars,
            max_regenerations: defaults.max_regenerations,
        }
    }
}

impl FileGenerationConfig {
    /// Convert to the application config for the given model.
    pub fn to_generation_config(&self, model: &str) -> GenerationConfig {
        GenerationConfig::default()
            .with_model(model)
            .with_max_tokens(self.max_tokens)
            .with_temperatures(self.temperature, self.regeneration_temperature)
            .with_max_input_chars(self.max_input_chars)
            .with_max_regenerations(self.max_regenerations)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.max_input_chars == 0 {
            issues.push(ConfigIssue::out_of_range(
                Severity::Error,
                "generation.max_input_chars",
                self.max_input_chars,
                "> 0",
            ));
        }
        if self.max_tokens == 0 {
            issues.push(ConfigIssue::out_of_range(
                Severity::Error,
                "generation.max_tokens",
                self.max_tokens,
                "> 0",
            ));
        }
        for (field, value) in [
            ("generation.temperature", self.temperature),
            ("generation.regeneration_temperature", self.regeneration_temperature),
        ] {
            if !TEMPERATURE_RANGE.contains(&value) {
                issues.push(ConfigIssue::out_of_range(
                    Severity::Warning,
                    field,
                    value,
                    "0.0..=2.0",
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_application() {
        let config = FileGenerationConfig::default().to_generation_config("deepseek-chat");
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn test_validate_flags_zero_input() {
        let config = FileGenerationConfig {
            max_input_chars: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_validate_warns_on_temperature() {
        let config = FileGenerationConfig {
            temperature: -0.5,
            regeneration_temperature: 2.5,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error()));
    }
}
