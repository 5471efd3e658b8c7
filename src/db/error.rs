use rusqlite::ErrorCode;
use thiserror::Error;

/// Classified storage failures.
///
/// Every statement the store executes maps its failure into one of three
/// categories so that callers can branch on the kind of problem instead of
/// matching on message text:
///
/// - [`StoreError::Operational`]: the engine could not run the statement
///   (missing table, locked or unreadable database file, ...)
/// - [`StoreError::Integrity`]: a constraint was violated
/// - [`StoreError::Unexpected`]: anything else (type mismatches,
///   conversion failures, ...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("operational error: {0}")]
    Operational(String),
    #[error("integrity error: {0}")]
    Integrity(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _) => match e.code {
                ErrorCode::ConstraintViolation => StoreError::Integrity(err.to_string()),
                _ => StoreError::Operational(err.to_string()),
            },
            _ => StoreError::Unexpected(err.to_string()),
        }
    }
}
