//! Database operation spans.
//!
//! Span constructors for the two label shapes executor operations use:
//! statement spans (labeled with the statement text) and bulk-load spans
//! (labeled `copyFrom:{target}`).

use tracing::{span, Level, Span};

use crate::types::TableIdent;

/// Create a span for a statement operation (execute/query/query_one).
///
/// # Arguments
///
/// * `statement` - Statement text, used verbatim as the span label
///
/// # Returns
///
/// Tracing span with OpenTelemetry database attributes
///
/// # Example
///
/// ```rust,ignore
/// let span = statement_span("DELETE FROM sessions WHERE expired");
/// let _guard = span.entered();
/// ```
pub fn statement_span(statement: &str) -> Span {
    span!(
        Level::INFO,
        "db.statement",
        otel.name = %statement,
        otel.kind = "client",
        db.query.text = %statement,
        db.response.returned_rows = tracing::field::Empty,
        db.response.affected_rows = tracing::field::Empty,
    )
}

/// Create a span for a bulk-load operation.
///
/// The label is `copyFrom:` plus the sanitized target, so a hostile
/// target name cannot be misread as statement syntax in trace output.
///
/// # Arguments
///
/// * `target` - Bulk-load destination
///
/// # Returns
///
/// Tracing span with OpenTelemetry database attributes
pub fn copy_from_span(target: &TableIdent) -> Span {
    let target = target.sanitize();
    span!(
        Level::INFO,
        "db.copy_from",
        otel.name = format!("copyFrom:{}", target),
        otel.kind = "client",
        db.operation.name = "copy_from",
        db.collection.name = %target,
        db.response.returned_rows = tracing::field::Empty,
        db.response.affected_rows = tracing::field::Empty,
    )
}

/// Record database operation metrics in the current span.
///
/// # Arguments
///
/// * `rows_returned` - Number of rows returned (optional)
/// * `rows_affected` - Number of rows modified (optional)
///
/// # Example
///
/// ```rust,ignore
/// let span = statement_span("DELETE FROM sessions WHERE expired");
/// let _guard = span.entered();
///
/// let summary = conn.execute(statement, params)?;
/// record_db_metrics(None, Some(summary.rows_affected()));
/// ```
pub fn record_db_metrics(rows_returned: Option<u64>, rows_affected: Option<u64>) {
    let span = Span::current();
    if let Some(returned) = rows_returned {
        span.record("db.response.returned_rows", returned);
    }
    if let Some(affected) = rows_affected {
        span.record("db.response.affected_rows", affected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing_subscriber::prelude::*;

    #[test]
    fn test_statement_span_name() {
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());
        let span = statement_span("SELECT 1");
        assert_eq!(span.metadata().unwrap().name(), "db.statement");
    }

    #[test]
    fn test_copy_from_span_name() {
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());
        let span = copy_from_span(&TableIdent::from("orders"));
        assert_eq!(span.metadata().unwrap().name(), "db.copy_from");
    }
}
