//! Question records and insert validation.
//!
//! # Invariants
//! - `NewQuestion::validate()` must pass before the store is touched.
//! - `category` is an opaque key here; referential integrity belongs to
//!   the store.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned question identifier.
pub type QuestionId = i64;

/// Persisted trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

/// Question payload before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

/// Insert payload validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionValidationError {
    /// A required field is missing or blank after trim.
    BlankField(&'static str),
    /// A numeric field carried text that is not an integer.
    NotANumber(&'static str),
}

impl Display for QuestionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "field `{field}` must not be blank"),
            Self::NotANumber(field) => write!(f, "field `{field}` must be an integer"),
        }
    }
}

impl Error for QuestionValidationError {}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Checks that text fields carry content.
    pub fn validate(&self) -> Result<(), QuestionValidationError> {
        if self.question.trim().is_empty() {
            return Err(QuestionValidationError::BlankField("question"));
        }
        if self.answer.trim().is_empty() {
            return Err(QuestionValidationError::BlankField("answer"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NewQuestion, QuestionValidationError};

    #[test]
    fn validate_rejects_whitespace_only_text() {
        let err = NewQuestion::new("   ", "Paris", 3, 1).validate().unwrap_err();
        assert_eq!(err, QuestionValidationError::BlankField("question"));

        let err = NewQuestion::new("Capital of France?", "\t", 3, 1)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionValidationError::BlankField("answer"));
    }

    #[test]
    fn validate_accepts_complete_payload() {
        NewQuestion::new("Capital of France?", "Paris", 3, 1)
            .validate()
            .unwrap();
    }
}
