//! Table identifiers for bulk-load targets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dotted, possibly schema-qualified table identifier, e.g. `orders`
/// or `billing.invoices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableIdent(Vec<String>);

impl TableIdent {
    /// Build an identifier from its parts (`["schema", "table"]`).
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// The identifier's parts, outermost first.
    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Render a form safe to embed in log and trace output.
    ///
    /// NUL bytes are stripped. A part that is a plain identifier
    /// (`[a-z_][a-z0-9_$]*`) is emitted bare; anything else is
    /// double-quoted with embedded quotes doubled. Parts join with `.`.
    pub fn sanitize(&self) -> String {
        let mut out = String::new();
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            let part: String = part.chars().filter(|c| *c != '\0').collect();
            if is_plain_identifier(&part) {
                out.push_str(&part);
            } else {
                out.push('"');
                out.push_str(&part.replace('"', "\"\""));
                out.push('"');
            }
        }
        out
    }
}

fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$')
}

impl From<&str> for TableIdent {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<Vec<String>> for TableIdent {
    fn from(parts: Vec<String>) -> Self {
        Self(parts)
    }
}

impl fmt::Display for TableIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sanitize())
    }
}
