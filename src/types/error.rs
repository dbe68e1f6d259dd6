//! Error types for executor operations.

use thiserror::Error;

/// Errors surfaced by [`Executor`](crate::executor::Executor) operations.
///
/// These originate in the concrete executor (or the backend behind it).
/// Decorators forward them untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    /// `query_one` matched no rows.
    #[error("no rows in result set")]
    NoRows,

    /// The call was cancelled before the backend produced a result.
    #[error("operation cancelled")]
    Cancelled,

    /// Row access by a column name the row does not carry.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Any failure reported by the backing store.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DatabaseError>;
