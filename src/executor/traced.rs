//! Tracing decorator for executors.

use async_trait::async_trait;
use tracing::Instrument;

use crate::executor::Executor;
use crate::otel::{copy_from_span, record_db_metrics, statement_span};
use crate::types::{ExecSummary, Result, Row, RowSource, Rows, TableIdent, Value};

/// Wraps an [`Executor`] so that every call runs inside a tracing span,
/// without changing what the call returns.
///
/// Statement operations are labeled with the statement text itself; bulk
/// loads with `copyFrom:` plus the sanitized target. The wrapped future
/// is instrumented with the span, so the span closes on every exit path:
/// completion, error, or the future being dropped mid-call. Results and
/// errors pass through untouched, and the decorator holds no state beyond
/// the wrapped executor, so it is as concurrency-safe as its inner one.
///
/// `TracedExecutor` implements [`Executor`] itself, so decorators stack
/// and call sites cannot tell it apart from the executor it wraps.
///
/// # Example
///
/// ```rust,ignore
/// use sqltrace::{Executor, TracedExecutor};
///
/// let db = TracedExecutor::new(connect(&dsn).await?);
/// let summary = db.execute("DELETE FROM sessions WHERE expired", &[]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct TracedExecutor<E> {
    inner: E,
}

impl<E> TracedExecutor<E> {
    /// Wrap an executor.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped executor.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap, returning the wrapped executor.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

#[async_trait]
impl<E: Executor> Executor for TracedExecutor<E> {
    async fn execute(&self, statement: &str, params: &[Value]) -> Result<ExecSummary> {
        let span = statement_span(statement);
        async {
            let summary = self.inner.execute(statement, params).await?;
            record_db_metrics(None, Some(summary.rows_affected()));
            Ok(summary)
        }
        .instrument(span)
        .await
    }

    async fn query(&self, statement: &str, params: &[Value]) -> Result<Rows> {
        let span = statement_span(statement);
        self.inner.query(statement, params).instrument(span).await
    }

    async fn query_one(&self, statement: &str, params: &[Value]) -> Result<Row> {
        let span = statement_span(statement);
        self.inner.query_one(statement, params).instrument(span).await
    }

    async fn copy_from(
        &self,
        target: &TableIdent,
        columns: &[String],
        source: RowSource,
    ) -> Result<u64> {
        let span = copy_from_span(target);
        async {
            let rows = self.inner.copy_from(target, columns, source).await?;
            record_db_metrics(None, Some(rows));
            Ok(rows)
        }
        .instrument(span)
        .await
    }
}
