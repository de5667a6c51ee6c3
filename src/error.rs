use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No rows returned when at least one was expected
    #[error("no rows found")]
    NotFound,

    /// Error converting a result row into the mapped type
    #[error("scan error: {0}")]
    Scan(String),

    /// Generic error
    #[error("database error: {0}")]
    Other(String),

    /// Rusqlite specific errors
    #[error("rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for database operations
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Error from a bulk insert that stopped partway through its batches.
///
/// `affected` is the sum of affected-row counts reported by the batches that
/// completed before the failing one. With an autocommit handle those rows are
/// already committed; inside a transaction handle the caller can still roll
/// the whole operation back.
#[derive(Debug, Error)]
#[error("bulk insert stopped after {affected} affected rows: {source}")]
pub struct BulkInsertError {
    /// Rows affected by the batches that completed before the failure.
    pub affected: usize,
    /// The execution error that terminated the operation.
    #[source]
    pub source: Error,
}

impl From<BulkInsertError> for Error {
    /// Drops the partial total, for callers that only care that the insert
    /// failed.
    fn from(err: BulkInsertError) -> Self {
        err.source
    }
}
