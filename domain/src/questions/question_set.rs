//! QuestionSet value object

use crate::core::error::DomainError;
use serde::Serialize;

/// Number of questions requested from the model and shown in the panel.
pub const QUESTION_COUNT: usize = 3;

/// Questions returned whenever generation fails at any step.
pub const FALLBACK_QUESTIONS: [&str; QUESTION_COUNT] = [
    "What is the author's core argument and how might it be challenged?",
    "Which assumptions in the article might warrant deeper examination?",
    "How might the conclusions change if different methodology or data were used?",
];

/// An ordered set of 1 to [`QUESTION_COUNT`] questions (Value Object)
///
/// Entries are HTML fragments or plain text, exactly as parsed. The set is
/// replaced wholesale on regeneration, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    questions: Vec<String>,
    fallback: bool,
}

impl QuestionSet {
    /// Build a set from parsed entries, keeping at most the first three.
    pub fn new(mut questions: Vec<String>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionSet);
        }
        questions.truncate(QUESTION_COUNT);
        Ok(Self {
            questions,
            fallback: false,
        })
    }

    /// The fixed fallback set.
    pub fn fallback() -> Self {
        Self {
            questions: FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            fallback: true,
        }
    }

    /// True if this is the fixed fallback set.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.questions.iter()
    }

    pub fn into_questions(self) -> Vec<String> {
        self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_set_rejected() {
        assert_eq!(QuestionSet::new(Vec::new()), Err(DomainError::EmptyQuestionSet));
    }

    #[test]
    fn test_set_keeps_first_three() {
        let set = QuestionSet::new(owned(&["a", "b", "c", "d", "e"])).unwrap();
        assert_eq!(set.questions(), &owned(&["a", "b", "c"])[..]);
        assert!(!set.is_fallback());
    }

    #[test]
    fn test_short_set_kept_as_is() {
        let set = QuestionSet::new(owned(&["only one"])).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_fallback_set() {
        let set = QuestionSet::fallback();
        assert_eq!(set.len(), QUESTION_COUNT);
        assert!(set.is_fallback());
        assert_eq!(set.questions()[0], FALLBACK_QUESTIONS[0]);
    }

    #[test]
    fn test_serialize_shape() {
        let set = QuestionSet::new(owned(&["Q1", "Q2", "Q3"])).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["questions"][2], "Q3");
        assert_eq!(json["fallback"], false);
    }
}
