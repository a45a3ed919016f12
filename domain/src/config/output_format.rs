//! Output format value object

use serde::{Deserialize, Serialize};

/// How generated questions are written out
///
/// This is a domain concept shared by the config file and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bulleted terminal output (default)
    #[default]
    Text,
    /// `{"questions": [...]}`
    Json,
    /// The source document with the question panel injected
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Html).unwrap();
        assert_eq!(json, "\"html\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
