//! Quiz question selection.
//!
//! # Responsibility
//! - Build the candidate pool for a quiz step (whole catalog or one
//!   category).
//! - Pick one not-yet-asked question uniformly at random.
//!
//! # Invariants
//! - Exhaustion is checked before any draw, so selection always
//!   terminates.
//! - Draws are independent and uniform over the whole pool; asked
//!   questions are rejected, never removed.

use crate::model::question::{Question, QuestionId};
use crate::model::request::QuizRequest;
use crate::repo::question_repo::QuestionStore;
use crate::service::error::{CatalogError, CatalogResult};
use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

/// Result of a quiz step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "question", rename_all = "snake_case")]
pub enum QuizOutcome {
    /// Next question to ask.
    Question(Question),
    /// Every question in the pool was already asked; the quiz is over.
    Exhausted,
}

impl QuizOutcome {
    /// Same value as the serialized `status` tag.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Question(_) => "question",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Picks a question from `pool` whose id is not in `asked`.
///
/// Returns `None` when the pool is empty or fully asked. Otherwise draws
/// uniform indices until an unseen question comes up.
pub fn select_unseen<'a, R: Rng>(
    pool: &'a [Question],
    asked: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<&'a Question> {
    if pool.iter().all(|question| asked.contains(&question.id)) {
        return None;
    }

    loop {
        let candidate = &pool[rng.gen_range(0..pool.len())];
        if !asked.contains(&candidate.id) {
            return Some(candidate);
        }
    }
}

/// Quiz selector over an injected question store.
pub struct QuizService<S: QuestionStore, R: Rng = ThreadRng> {
    store: S,
    rng: R,
}

impl<S: QuestionStore> QuizService<S> {
    /// Creates a selector drawing from the thread-local generator.
    pub fn new(store: S) -> Self {
        Self::with_rng(store, rand::thread_rng())
    }
}

impl<S: QuestionStore, R: Rng> QuizService<S, R> {
    /// Creates a selector with a caller-provided generator.
    pub fn with_rng(store: S, rng: R) -> Self {
        Self { store, rng }
    }

    /// Serves the next quiz question for a request body.
    ///
    /// Missing `previous_questions` or `quiz_category` is a malformed
    /// request. Category id `0` draws from the whole catalog.
    pub fn next_question(&mut self, request: &QuizRequest) -> CatalogResult<QuizOutcome> {
        let selection = request
            .selection()
            .map_err(CatalogError::MalformedQuizRequest)?;

        let pool = if selection.is_unscoped() {
            self.store.list_all()
        } else {
            self.store.filter_by_category(selection.category)
        }
        .map_err(CatalogError::InternalFailure)?;

        let outcome = match select_unseen(&pool, &selection.asked, &mut self.rng) {
            Some(question) => QuizOutcome::Question(question.clone()),
            None => QuizOutcome::Exhausted,
        };

        debug!(
            "event=quiz_next module=service status={} category={} pool={} asked={}",
            outcome.status(),
            selection.category,
            pool.len(),
            selection.asked.len()
        );

        Ok(outcome)
    }
}
