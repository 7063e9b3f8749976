use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer to the request handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested or referenced entity does not exist.
    #[error("not found")]
    NotFound,
    /// The submitted form failed validation.
    #[error("{0}")]
    Form(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            // A dangling foreign reference means the referenced entity is gone.
            RepositoryError::NotFound | RepositoryError::ConstraintViolation(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}
