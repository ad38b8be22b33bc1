use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question needs at least 2 options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct option index {index} out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

/// One multiple-choice prompt. Immutable once validated.
///
/// The serialized form uses the `question`/`choices`/`correctIndex` field
/// names of the upstream question-set JSON, and deserialization runs the
/// same validation as [`QuestionItem::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct QuestionItem {
    #[serde(rename = "question")]
    prompt: String,
    #[serde(rename = "choices")]
    options: Vec<String>,
    #[serde(rename = "correctIndex")]
    correct_index: usize,
}

impl QuestionItem {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                count: options.len(),
            });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }
        Ok(Self {
            prompt: prompt.into(),
            options,
            correct_index,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Whether the given option index is the correct pick.
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    choices: Vec<String>,
    #[serde(rename = "correctIndex")]
    correct_index: usize,
}

impl TryFrom<RawQuestion> for QuestionItem {
    type Error = QuestionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        QuestionItem::new(raw.question, raw.choices, raw.correct_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn test_valid_item() {
        let item = QuestionItem::new("2 + 2 = ?", options(4), 1).unwrap();
        assert_eq!(item.prompt(), "2 + 2 = ?");
        assert_eq!(item.options().len(), 4);
        assert!(item.is_correct(1));
        assert!(!item.is_correct(0));
    }

    #[test]
    fn test_too_few_options() {
        let err = QuestionItem::new("q", options(1), 0).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { count: 1 });
    }

    #[test]
    fn test_correct_index_out_of_range() {
        let err = QuestionItem::new("q", options(3), 3).unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn test_deserialize_valid() {
        let json = r#"{"question":"1 + 1 = ?","choices":["1","2"],"correctIndex":1}"#;
        let item: QuestionItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.prompt(), "1 + 1 = ?");
        assert_eq!(item.correct_index(), 1);
    }

    #[test]
    fn test_deserialize_rejects_bad_index() {
        let json = r#"{"question":"q","choices":["a","b"],"correctIndex":5}"#;
        assert!(serde_json::from_str::<QuestionItem>(json).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let item = QuestionItem::new("q", options(3), 2).unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let back: QuestionItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }
}
