use thiserror::Error;

/// Failures the store can produce. Rejected input never reaches SQLite;
/// engine errors pass through unchanged. Absent rows are not errors and
/// are reported as `Option`/`bool` by the lookup operations.
#[derive(Error, Debug)]
pub(crate) enum StoreError {
    #[error("invalid holding: {0}")]
    Invalid(String),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub(crate) type Result<T> = std::result::Result<T, StoreError>;
