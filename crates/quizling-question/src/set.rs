use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::item::QuestionItem;
use crate::provider::Subject;

/// A named collection of questions for one subject, as stored in the
/// question-set JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub name: String,
    pub subject: Subject,
    pub questions: Vec<QuestionItem>,
}

impl QuestionSet {
    /// Parse a question set from a JSON reader. Item validation happens
    /// during deserialization.
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_question_set() {
        let json = r#"{
            "name": "Addition basics",
            "subject": "math",
            "questions": [
                {"question": "1 + 1 = ?", "choices": ["1", "2", "3"], "correctIndex": 1},
                {"question": "2 + 3 = ?", "choices": ["4", "5", "6"], "correctIndex": 1}
            ]
        }"#;
        let set = QuestionSet::from_reader(json.as_bytes()).unwrap();
        assert_eq!(set.name, "Addition basics");
        assert_eq!(set.subject, Subject::Math);
        assert_eq!(set.questions.len(), 2);
    }

    #[test]
    fn test_parse_rejects_invalid_item() {
        let json = r#"{
            "name": "bad",
            "subject": "math",
            "questions": [
                {"question": "q", "choices": ["only one"], "correctIndex": 0}
            ]
        }"#;
        assert!(QuestionSet::from_reader(json.as_bytes()).is_err());
    }
}
