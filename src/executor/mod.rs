//! The query-execution capability.
//!
//! [`Executor`] is the seam between application code and a concrete
//! backend connection. Anything that implements it (a connection, a pool
//! handle, or a decorator around either) can run statements and bulk
//! loads. Decorators implement the trait themselves, so they stack.

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::{ExecSummary, Result, Row, RowSource, Rows, TableIdent, Value};

pub mod traced;

pub use traced::TracedExecutor;

/// A statement-executing capability.
///
/// Parameters bind positionally (`$1`, `$2`, ...). Implementations must
/// be safe for concurrent use; every method may suspend for as long as
/// the backend takes, and cancellation is the caller's: dropping the
/// returned future abandons the call.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run a statement that returns no rows, yielding its command-tag
    /// summary.
    async fn execute(&self, statement: &str, params: &[Value]) -> Result<ExecSummary>;

    /// Run a statement and stream its result rows lazily.
    async fn query(&self, statement: &str, params: &[Value]) -> Result<Rows>;

    /// Run a statement expected to match one row.
    ///
    /// # Errors
    ///
    /// [`DatabaseError::NoRows`](crate::types::DatabaseError::NoRows)
    /// when nothing matched.
    async fn query_one(&self, statement: &str, params: &[Value]) -> Result<Row>;

    /// Stream a batch of rows into `target` under `columns`, returning
    /// the number of rows written. A source that yields no rows is a
    /// valid zero-row load.
    async fn copy_from(
        &self,
        target: &TableIdent,
        columns: &[String],
        source: RowSource,
    ) -> Result<u64>;
}

#[async_trait]
impl<E: Executor + ?Sized> Executor for Box<E> {
    async fn execute(&self, statement: &str, params: &[Value]) -> Result<ExecSummary> {
        (**self).execute(statement, params).await
    }

    async fn query(&self, statement: &str, params: &[Value]) -> Result<Rows> {
        (**self).query(statement, params).await
    }

    async fn query_one(&self, statement: &str, params: &[Value]) -> Result<Row> {
        (**self).query_one(statement, params).await
    }

    async fn copy_from(
        &self,
        target: &TableIdent,
        columns: &[String],
        source: RowSource,
    ) -> Result<u64> {
        (**self).copy_from(target, columns, source).await
    }
}

#[async_trait]
impl<E: Executor + ?Sized> Executor for Arc<E> {
    async fn execute(&self, statement: &str, params: &[Value]) -> Result<ExecSummary> {
        (**self).execute(statement, params).await
    }

    async fn query(&self, statement: &str, params: &[Value]) -> Result<Rows> {
        (**self).query(statement, params).await
    }

    async fn query_one(&self, statement: &str, params: &[Value]) -> Result<Row> {
        (**self).query_one(statement, params).await
    }

    async fn copy_from(
        &self,
        target: &TableIdent,
        columns: &[String],
        source: RowSource,
    ) -> Result<u64> {
        (**self).copy_from(target, columns, source).await
    }
}
