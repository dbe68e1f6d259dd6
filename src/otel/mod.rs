//! OpenTelemetry instrumentation for executor operations.
//!
//! Follows OpenTelemetry semantic conventions for database operations:
//! - https://opentelemetry.io/docs/specs/semconv/database/database-spans/
//!
//! # Database Semantic Conventions
//!
//! **Span naming**: the span's `otel.name` carries the human-readable
//! label: the statement text for statement operations, or
//! `copyFrom:{target}` for bulk loads.
//!
//! **Required attributes**:
//! - `otel.kind`: Always `"client"`
//!
//! **Conditionally required**:
//! - `db.query.text`: Statement text (statement spans)
//! - `db.operation.name`: Operation type (bulk-load spans)
//! - `db.collection.name`: Sanitized target (bulk-load spans)
//!
//! **Recommended**:
//! - `db.response.affected_rows` / `db.response.returned_rows`: recorded
//!   after the operation completes, via [`record_db_metrics`]
//!
//! Span construction never fails: with no subscriber installed (or the
//! callsite disabled) the span is inert and the instrumented operation
//! runs exactly as it would untraced. Exporters, sampling, and subscriber
//! installation belong to the embedding application.
//!
//! # Example
//!
//! ```rust,ignore
//! use sqltrace::otel::statement_span;
//! use tracing::Instrument;
//!
//! let span = statement_span("SELECT * FROM articles");
//! let rows = conn.query("SELECT * FROM articles", &[]).instrument(span).await?;
//! ```

pub mod db;

pub use db::{copy_from_span, record_db_metrics, statement_span};
