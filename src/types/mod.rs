//! Core data types: values, rows, result summaries, identifiers, errors.

pub mod error;
pub mod ident;
pub mod row;
pub mod value;

pub use error::{DatabaseError, Result};
pub use ident::TableIdent;
pub use row::{ExecSummary, Row, RowSource, Rows};
pub use value::Value;
