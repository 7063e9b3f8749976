use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors produced by the data access layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced record does not exist.
    #[error("record not found")]
    NotFound,
    /// A foreign reference points at a missing record.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Database(DieselError),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                Self::ConstraintViolation(info.message().to_string())
            }
            other => Self::Database(other),
        }
    }
}
