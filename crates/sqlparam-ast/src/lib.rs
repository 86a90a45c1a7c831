//! Syntax tree for SQL type and literal fragments
//!
//! This crate defines the nodes produced by the sqlparam syntax frontend for the
//! GoogleSQL type grammar and the literal subset of its expression grammar.
//! Every node renders back to SQL through `Display`.

mod expression;
mod literal;
mod types;

pub use expression::*;
pub use literal::*;
pub use types::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier (field name, alias, type keyword or path segment)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// The identifier text, without backquotes
    pub name: String,
    /// Whether this is a backquoted identifier
    pub quoted: bool,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quoted: false,
        }
    }

    pub fn quoted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quoted: true,
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "`{}`", self.name.replace('`', "\\`"))
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Write `items` separated by `", "`
pub(crate) fn write_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
