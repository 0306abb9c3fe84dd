//! Catalog error taxonomy.
//!
//! # Responsibility
//! - Classify every service failure into one of four kinds.
//! - Provide the status code and fixed public message the boundary layer
//!   renders for each kind.
//!
//! # Invariants
//! - No error is returned together with partial results.
//! - Store failures during reads are `InternalFailure`; during mutations
//!   they are `ProcessingFailure`.

use crate::model::request::RequestError;
use crate::repo::question_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Coarse failure class surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    ProcessingFailure,
    InternalFailure,
}

impl ErrorKind {
    /// Default HTTP status for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            Self::InvalidInput => 422,
            Self::NotFound => 404,
            Self::ProcessingFailure => 422,
            Self::InternalFailure => 500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::ProcessingFailure => "processing_failure",
            Self::InternalFailure => "internal_failure",
        }
    }
}

/// Fixed user-visible message for an HTTP status.
pub fn public_message(status_code: u16) -> &'static str {
    match status_code {
        400 => "Bad request",
        404 => "Resource not found",
        422 => "Unprocessable entity",
        _ => "An internal server error has occurred",
    }
}

/// Service-level error for catalog operations.
#[derive(Debug)]
pub enum CatalogError {
    /// Request payload could not be turned into a valid operation.
    InvalidInput(RequestError),
    /// Quiz request without its required fields.
    MalformedQuizRequest(RequestError),
    /// Category id that does not exist.
    UnknownCategory(i64),
    /// Query whose empty result counts as absence.
    NotFound(&'static str),
    /// Mutation rejected by the store.
    ProcessingFailure(RepoError),
    /// Unexpected fault while serving a read.
    InternalFailure(RepoError),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::MalformedQuizRequest(_) | Self::UnknownCategory(_) => {
                ErrorKind::InvalidInput
            }
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::ProcessingFailure(_) => ErrorKind::ProcessingFailure,
            Self::InternalFailure(_) => ErrorKind::InternalFailure,
        }
    }

    /// Status the boundary layer should answer with.
    ///
    /// Malformed quiz requests are a 400; every other invalid input is 422.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedQuizRequest(_) => 400,
            other => other.kind().status_code(),
        }
    }

    pub fn public_message(&self) -> &'static str {
        public_message(self.status_code())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid input: {err}"),
            Self::MalformedQuizRequest(err) => write!(f, "malformed quiz request: {err}"),
            Self::UnknownCategory(id) => write!(f, "category not found: {id}"),
            Self::NotFound(what) => write!(f, "no {what} found"),
            Self::ProcessingFailure(err) => write!(f, "catalog mutation failed: {err}"),
            Self::InternalFailure(err) => write!(f, "catalog read failed: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) | Self::MalformedQuizRequest(err) => Some(err),
            Self::ProcessingFailure(err) | Self::InternalFailure(err) => Some(err),
            Self::UnknownCategory(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<RequestError> for CatalogError {
    fn from(value: RequestError) -> Self {
        Self::InvalidInput(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{public_message, CatalogError, ErrorKind};
    use crate::model::request::RequestError;
    use crate::repo::question_repo::RepoError;

    #[test]
    fn kinds_map_to_statuses_and_messages() {
        let cases = [
            (
                CatalogError::InvalidInput(RequestError::MissingField("searchTerm")),
                ErrorKind::InvalidInput,
                422,
            ),
            (
                CatalogError::MalformedQuizRequest(RequestError::MissingField("quiz_category")),
                ErrorKind::InvalidInput,
                400,
            ),
            (CatalogError::UnknownCategory(42), ErrorKind::InvalidInput, 422),
            (CatalogError::NotFound("questions"), ErrorKind::NotFound, 404),
            (
                CatalogError::ProcessingFailure(RepoError::NotFound(7)),
                ErrorKind::ProcessingFailure,
                422,
            ),
            (
                CatalogError::InternalFailure(RepoError::InvalidData("bad".to_string())),
                ErrorKind::InternalFailure,
                500,
            ),
        ];

        for (error, kind, status) in cases {
            assert_eq!(error.kind(), kind, "{error}");
            assert_eq!(error.status_code(), status, "{error}");
        }
    }

    #[test]
    fn public_messages_are_fixed() {
        assert_eq!(public_message(400), "Bad request");
        assert_eq!(public_message(404), "Resource not found");
        assert_eq!(public_message(422), "Unprocessable entity");
        assert_eq!(
            CatalogError::InternalFailure(RepoError::InvalidData(String::new())).public_message(),
            "An internal server error has occurred"
        );
    }
}
