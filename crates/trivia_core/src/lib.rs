//! Trivia question catalog core.
//!
//! Stores categorized question/answer records, serves paginated listing,
//! search and category browsing, and picks non-repeating random quiz
//! questions. Storage is reached only through the [`QuestionStore`]
//! capability handed to each service.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{CatalogConfig, QUESTIONS_PER_PAGE};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::category::{category_map, Category, CategoryId, CategoryMap, ALL_CATEGORIES};
pub use model::question::{NewQuestion, Question, QuestionId, QuestionValidationError};
pub use model::request::{
    IntField, NewQuestionRequest, PageRequest, QuizCategory, QuizRequest, QuizSelection,
    RequestError, SearchRequest,
};
pub use repo::question_repo::{QuestionStore, RepoError, RepoResult, SqliteQuestionStore};
pub use service::error::{public_message, CatalogError, CatalogResult, ErrorKind};
pub use service::pagination::paginate;
pub use service::question_service::{
    CategoryPage, MutationAck, QuestionPage, QuestionService, SearchPage,
};
pub use search::fold::casefold;
pub use service::quiz_service::{select_unseen, QuizOutcome, QuizService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
