//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("A question set needs at least one question")]
    EmptyQuestionSet,

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
}

impl DomainError {
    /// Check if this error comes from an empty parse result
    pub fn is_empty_question_set(&self) -> bool {
        matches!(self, DomainError::EmptyQuestionSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_set_display() {
        let error = DomainError::EmptyQuestionSet;
        assert_eq!(error.to_string(), "A question set needs at least one question");
    }

    #[test]
    fn test_is_empty_question_set_check() {
        assert!(DomainError::EmptyQuestionSet.is_empty_question_set());
        assert!(!DomainError::InvalidCredential("empty".to_string()).is_empty_question_set());
    }
}
