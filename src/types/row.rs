//! Rows, result summaries, and row streams.

use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_stream::Stream;

use crate::types::{DatabaseError, Result, Value};

/// One result row: shared column names plus the row's values.
///
/// Column names are reference-counted so every row of a result set shares
/// one allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    /// Build a row from its column names and values.
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    /// Column names, in result order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Value at a positional index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Value for a named column.
    ///
    /// # Errors
    ///
    /// [`DatabaseError::ColumnNotFound`] when the row has no such column.
    pub fn try_get(&self, column: &str) -> Result<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i))
            .ok_or_else(|| DatabaseError::ColumnNotFound(column.to_string()))
    }

    /// All values, in result order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for a zero-column row.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Summary of a row-less statement, as reported by the backend's command
/// tag (e.g. `"DELETE 5"`, `"CREATE TABLE"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecSummary {
    tag: String,
}

impl ExecSummary {
    /// Wrap a backend command tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// The raw command tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Affected-row count: the tag's trailing integer token, 0 when the
    /// tag carries none.
    pub fn rows_affected(&self) -> u64 {
        self.tag
            .rsplit(' ')
            .next()
            .and_then(|token| token.parse().ok())
            .unwrap_or(0)
    }
}

/// Lazy row sequence returned by `query`.
pub type Rows = Pin<Box<dyn Stream<Item = Result<Row>> + Send>>;

/// Row stream consumed by `copy_from`: one `Vec<Value>` per input row, in
/// the target's column order.
pub type RowSource = Pin<Box<dyn Stream<Item = Result<Vec<Value>>> + Send>>;
