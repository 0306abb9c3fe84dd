//! Question store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide ordered listing, filtering, substring search, insert and
//!   delete over `questions`, plus read access to `categories`.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `NewQuestion::validate()` before SQL mutations.
//! - Read paths reject rows that cannot be decoded instead of masking them.
//! - Every listing is ordered by `id ASC`.

use crate::db::DbError;
use crate::model::category::{Category, CategoryId};
use crate::model::question::{NewQuestion, Question, QuestionId, QuestionValidationError};
use crate::search::fold::CASEFOLD_SQL_FUNCTION;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const QUESTION_SELECT_SQL: &str = "SELECT
    id,
    question,
    answer,
    category,
    difficulty
FROM questions";

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error for question persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(QuestionValidationError),
    Db(DbError),
    NotFound(QuestionId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "question not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<QuestionValidationError> for RepoError {
    fn from(value: QuestionValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage capability consumed by the query engine and quiz selector.
pub trait QuestionStore {
    /// All questions, ascending id.
    fn list_all(&self) -> RepoResult<Vec<Question>>;
    /// All categories, ascending id.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    fn find_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Questions whose `category` equals `id`, ascending id.
    fn filter_by_category(&self, id: CategoryId) -> RepoResult<Vec<Question>>;
    /// Unicode case-insensitive substring match on question text,
    /// ascending id.
    ///
    /// The term is matched as given, whitespace included; an empty term
    /// matches nothing.
    fn search_by_text(&self, term: &str) -> RepoResult<Vec<Question>>;
    /// Persists a question and returns the id assigned by the store.
    fn insert(&self, question: &NewQuestion) -> RepoResult<QuestionId>;
    /// Removes a question; absent ids yield `RepoError::NotFound`.
    fn delete_by_id(&self, id: QuestionId) -> RepoResult<()>;
    fn count_questions(&self) -> RepoResult<usize>;
}

/// SQLite-backed question store.
pub struct SqliteQuestionStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionStore<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    ///
    /// Search needs the `casefold` SQL function those openers register.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_questions(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> RepoResult<Vec<Question>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut questions = Vec::new();

        while let Some(row) = rows.next()? {
            questions.push(parse_question_row(row)?);
        }

        Ok(questions)
    }
}

impl QuestionStore for SqliteQuestionStore<'_> {
    fn list_all(&self) -> RepoResult<Vec<Question>> {
        self.query_questions(&format!("{QUESTION_SELECT_SQL} ORDER BY id ASC;"), [])
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        Ok(categories)
    }

    fn find_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1;",
                [id],
                |row| Ok(Category::new(row.get("id")?, row.get::<_, String>("type")?)),
            )
            .optional()?;
        Ok(category)
    }

    fn filter_by_category(&self, id: CategoryId) -> RepoResult<Vec<Question>> {
        self.query_questions(
            &format!("{QUESTION_SELECT_SQL} WHERE category = ?1 ORDER BY id ASC;"),
            [id],
        )
    }

    fn search_by_text(&self, term: &str) -> RepoResult<Vec<Question>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }

        self.query_questions(
            &format!(
                "{QUESTION_SELECT_SQL}
                 WHERE instr({CASEFOLD_SQL_FUNCTION}(question), {CASEFOLD_SQL_FUNCTION}(?1)) > 0
                 ORDER BY id ASC;"
            ),
            [term],
        )
    }

    fn insert(&self, question: &NewQuestion) -> RepoResult<QuestionId> {
        question.validate()?;

        self.conn.execute(
            "INSERT INTO questions (
                question,
                answer,
                category,
                difficulty
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                question.question.as_str(),
                question.answer.as_str(),
                question.category,
                question.difficulty,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn delete_by_id(&self, id: QuestionId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn count_questions(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative question count `{count}`")))
    }
}

fn parse_question_row(row: &Row<'_>) -> RepoResult<Question> {
    let question = Question {
        id: row.get("id")?,
        question: row.get("question")?,
        answer: row.get("answer")?,
        category: row.get("category")?,
        difficulty: row.get("difficulty")?,
    };

    if question.question.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "blank text in questions.question for id `{}`",
            question.id
        )));
    }

    Ok(question)
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    let id: CategoryId = row.get("id")?;
    let kind: String = row.get("type")?;
    if kind.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "blank label in categories.type for id `{id}`"
        )));
    }
    Ok(Category::new(id, kind))
}
