//! Typed request payloads for the upward interface.
//!
//! # Responsibility
//! - Decode loosely shaped JSON bodies into explicit structures.
//! - Reject missing or blank fields before any store access.
//!
//! # Invariants
//! - A request that converts successfully never needs re-validation by
//!   the services.

use crate::model::category::{CategoryId, ALL_CATEGORIES};
use crate::model::question::{NewQuestion, QuestionId, QuestionValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Page number used when the caller omits one.
pub const DEFAULT_PAGE: u32 = 1;

/// Request decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Field absent from the payload.
    MissingField(&'static str),
    /// Field present but blank or malformed.
    InvalidField(QuestionValidationError),
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::InvalidField(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingField(_) => None,
            Self::InvalidField(err) => Some(err),
        }
    }
}

impl From<QuestionValidationError> for RequestError {
    fn from(value: QuestionValidationError) -> Self {
        Self::InvalidField(value)
    }
}

/// Integer field that clients send either as a number or as digits in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntField {
    Number(i64),
    Text(String),
}

impl IntField {
    fn resolve(&self, field: &'static str) -> Result<i64, QuestionValidationError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(QuestionValidationError::BlankField(field));
                }
                trimmed
                    .parse::<i64>()
                    .map_err(|_| QuestionValidationError::NotANumber(field))
            }
        }
    }
}

impl From<i64> for IntField {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Optional page selector; absent means the first page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: Option<u32>,
}

impl PageRequest {
    pub fn page(page: u32) -> Self {
        Self { page: Some(page) }
    }

    /// 1-based page number to serve.
    pub fn resolved(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}

/// Body of a question insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<IntField>,
    #[serde(default)]
    pub category: Option<IntField>,
}

impl NewQuestionRequest {
    /// Converts into a validated insert payload.
    ///
    /// Absent and blank fields are both reported as blank.
    pub fn into_new_question(self) -> Result<NewQuestion, RequestError> {
        let question = self
            .question
            .ok_or(QuestionValidationError::BlankField("question"))?;
        let answer = self
            .answer
            .ok_or(QuestionValidationError::BlankField("answer"))?;
        let difficulty = self
            .difficulty
            .ok_or(QuestionValidationError::BlankField("difficulty"))?
            .resolve("difficulty")?;
        let category = self
            .category
            .ok_or(QuestionValidationError::BlankField("category"))?
            .resolve("category")?;

        let new_question = NewQuestion {
            question,
            answer,
            category,
            difficulty,
        };
        new_question.validate()?;
        Ok(new_question)
    }
}

/// Body of a substring search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchRequest {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
        }
    }

    /// Returns the search term exactly as submitted.
    ///
    /// Absent, empty and whitespace-only terms are rejected; any other term
    /// keeps its surrounding whitespace.
    pub fn term(&self) -> Result<&str, RequestError> {
        match self.search_term.as_deref() {
            Some(term) if !term.trim().is_empty() => Ok(term),
            _ => Err(QuestionValidationError::BlankField("searchTerm").into()),
        }
    }
}

/// Category chosen for a quiz; id `0` means every category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: IntField,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Body of a quiz step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Validated quiz step input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSelection {
    /// Pool scope; [`ALL_CATEGORIES`] selects the full catalog.
    pub category: CategoryId,
    pub asked: HashSet<QuestionId>,
}

impl QuizSelection {
    pub fn is_unscoped(&self) -> bool {
        self.category == ALL_CATEGORIES
    }
}

impl QuizRequest {
    pub fn new(category: CategoryId, previous_questions: Vec<QuestionId>) -> Self {
        Self {
            previous_questions: Some(previous_questions),
            quiz_category: Some(QuizCategory {
                id: IntField::Number(category),
                kind: None,
            }),
        }
    }

    /// Checks presence of both fields and resolves the category id.
    pub fn selection(&self) -> Result<QuizSelection, RequestError> {
        let previous = self
            .previous_questions
            .as_ref()
            .ok_or(RequestError::MissingField("previous_questions"))?;
        let category = self
            .quiz_category
            .as_ref()
            .ok_or(RequestError::MissingField("quiz_category"))?
            .id
            .resolve("quiz_category.id")?;

        Ok(QuizSelection {
            category,
            asked: previous.iter().copied().collect(),
        })
    }
}
