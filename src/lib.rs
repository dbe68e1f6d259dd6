//! # sqltrace
//!
//! Transparent tracing instrumentation for SQL query executors.
//!
//! Wrap anything that implements [`Executor`] in a [`TracedExecutor`] and
//! every operation runs inside a tracing span, with no change to what the
//! operation accepts, returns, or raises. Spans integrate with whatever
//! `tracing` subscriber the application installs, so database work nests
//! under the surrounding request or job spans.
//!
//! ## Features
//!
//! - **Drop-in**: `TracedExecutor` implements `Executor`, so call sites
//!   cannot tell it apart from the connection it wraps, and decorators stack
//! - **Transparent**: results and errors pass through untouched; no
//!   retries, no wrapping, no suppression
//! - **Leak-free spans**: the wrapped future is instrumented with its
//!   span, so the span closes on success, failure, and cancellation alike
//! - **Best-effort**: with no subscriber installed, spans are inert and
//!   calls proceed untraced
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sqltrace::prelude::*;
//!
//! // Wrap an existing executor
//! let db = TracedExecutor::new(pool);
//!
//! // Use it exactly like the executor it wraps
//! let summary = db.execute("DELETE FROM sessions WHERE expired", &[]).await?;
//! let user = db.query_one("SELECT * FROM users WHERE id = $1", &[7.into()]).await?;
//! ```
//!
//! ## Span Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `otel.name` | Statement text, or `copyFrom:{target}` for bulk loads |
//! | `otel.kind` | Always `"client"` |
//! | `db.query.text` | Statement text (statement spans) |
//! | `db.operation.name` | `"copy_from"` (bulk-load spans) |
//! | `db.collection.name` | Sanitized target (bulk-load spans) |
//! | `db.response.affected_rows` | Recorded after execute / bulk load |

pub mod executor;
pub mod otel;
pub mod types;

pub use executor::{Executor, TracedExecutor};
pub use types::{DatabaseError, ExecSummary, Result, Row, RowSource, Rows, TableIdent, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::executor::{Executor, TracedExecutor};
    pub use crate::types::{
        DatabaseError, ExecSummary, Result, Row, RowSource, Rows, TableIdent, Value,
    };
}
