//! Question query engine.
//!
//! # Responsibility
//! - Serve paginated listing, substring search and category browsing.
//! - Validate and apply question inserts and deletes.
//!
//! # Invariants
//! - `total_questions` is always counted before pagination.
//! - An empty page from listing or search is `NotFound`; an empty category
//!   is a valid result.
//! - Deleting an absent id is a processing failure, same as a store error.

use crate::config::CatalogConfig;
use crate::model::category::{category_map, Category, CategoryId, CategoryMap};
use crate::model::question::{Question, QuestionId};
use crate::model::request::{NewQuestionRequest, PageRequest, SearchRequest};
use crate::repo::question_repo::QuestionStore;
use crate::service::error::{CatalogError, CatalogResult};
use crate::service::pagination::paginate;
use log::{debug, info, warn};
use serde::Serialize;

/// One page of the full catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// One page of search hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// One page of a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Acknowledgment for a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationAck {
    pub message: &'static str,
    /// Set for deletes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<QuestionId>,
}

/// Query engine over an injected question store.
pub struct QuestionService<S: QuestionStore> {
    store: S,
    config: CatalogConfig,
}

impl<S: QuestionStore> QuestionService<S> {
    /// Creates a service with the default page size.
    pub fn new(store: S) -> Self {
        Self::with_config(store, CatalogConfig::default())
    }

    pub fn with_config(store: S, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> CatalogConfig {
        self.config
    }

    /// Lists every category as an id-ordered label map.
    ///
    /// An empty category table is reported as `NotFound`.
    pub fn list_categories(&self) -> CatalogResult<CategoryMap> {
        let categories = self
            .store
            .list_categories()
            .map_err(CatalogError::InternalFailure)?;
        if categories.is_empty() {
            return Err(CatalogError::NotFound("categories"));
        }
        Ok(category_map(&categories))
    }

    /// Lists one page of all questions in id order.
    pub fn list_questions(&self, page: PageRequest) -> CatalogResult<QuestionPage> {
        let questions = self
            .store
            .list_all()
            .map_err(CatalogError::InternalFailure)?;
        let total_questions = questions.len();
        let current = self.page_of(page, &questions);

        if current.is_empty() {
            debug!(
                "event=question_list module=service status=empty page={} total={}",
                page.resolved(),
                total_questions
            );
            return Err(CatalogError::NotFound("questions"));
        }

        let categories = self
            .store
            .list_categories()
            .map_err(CatalogError::InternalFailure)?;

        Ok(QuestionPage {
            questions: current,
            total_questions,
            categories: category_map(&categories),
        })
    }

    /// Searches question text, ignoring Unicode case.
    ///
    /// The term is matched as submitted. Blank terms are invalid input;
    /// zero matches is `NotFound`.
    pub fn search_questions(
        &self,
        request: &SearchRequest,
        page: PageRequest,
    ) -> CatalogResult<SearchPage> {
        let term = request.term()?;
        let matches = self
            .store
            .search_by_text(term)
            .map_err(CatalogError::InternalFailure)?;
        let total_questions = matches.len();
        debug!(
            "event=question_search module=service status=ok term_len={} total={}",
            term.chars().count(),
            total_questions
        );

        if total_questions == 0 {
            return Err(CatalogError::NotFound("matching questions"));
        }

        Ok(SearchPage {
            questions: self.page_of(page, &matches),
            total_questions,
        })
    }

    /// Lists one page of a category's questions.
    ///
    /// Unknown categories are invalid input. A known category with no
    /// questions yields an empty page, not an error.
    pub fn questions_by_category(
        &self,
        category_id: CategoryId,
        page: PageRequest,
    ) -> CatalogResult<CategoryPage> {
        let category = self.require_category(category_id)?;
        let questions = self
            .store
            .filter_by_category(category.id)
            .map_err(CatalogError::InternalFailure)?;

        Ok(CategoryPage {
            total_questions: questions.len(),
            questions: self.page_of(page, &questions),
            current_category: category.kind,
        })
    }

    /// Validates and persists a new question.
    ///
    /// The assigned id is not returned; callers get an acknowledgment only.
    pub fn create_question(&self, request: NewQuestionRequest) -> CatalogResult<MutationAck> {
        let new_question = request.into_new_question()?;

        match self.store.insert(&new_question) {
            Ok(id) => {
                info!(
                    "event=question_create module=service status=ok question_id={} category={}",
                    id, new_question.category
                );
                Ok(MutationAck {
                    message: "Question successfully posted",
                    question_id: None,
                })
            }
            Err(err) => {
                warn!(
                    "event=question_create module=service status=error category={} error={}",
                    new_question.category, err
                );
                Err(CatalogError::ProcessingFailure(err))
            }
        }
    }

    /// Deletes a question by id.
    pub fn delete_question(&self, question_id: QuestionId) -> CatalogResult<MutationAck> {
        match self.store.delete_by_id(question_id) {
            Ok(()) => {
                info!(
                    "event=question_delete module=service status=ok question_id={}",
                    question_id
                );
                Ok(MutationAck {
                    message: "Question successfully deleted",
                    question_id: Some(question_id),
                })
            }
            Err(err) => {
                warn!(
                    "event=question_delete module=service status=error question_id={} error={}",
                    question_id, err
                );
                Err(CatalogError::ProcessingFailure(err))
            }
        }
    }

    fn require_category(&self, category_id: CategoryId) -> CatalogResult<Category> {
        self.store
            .find_category(category_id)
            .map_err(CatalogError::InternalFailure)?
            .ok_or(CatalogError::UnknownCategory(category_id))
    }

    fn page_of(&self, page: PageRequest, items: &[Question]) -> Vec<Question> {
        paginate(page.resolved(), self.config.page_size(), items).to_vec()
    }
}
