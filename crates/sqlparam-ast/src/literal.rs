//! Literal nodes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// `NULL`
    Null,
    /// `TRUE` / `FALSE`
    Boolean(bool),
    /// Integer literal, kept as text until evaluation
    Integer(IntegerLiteral),
    /// Floating point literal, kept as text until evaluation
    Float(FloatLiteral),
    /// String literal (escapes already decoded)
    String(String),
    /// Bytes literal (escapes already decoded)
    Bytes(Vec<u8>),
    /// `DATE 'text'`
    Date(String),
    /// `TIMESTAMP 'text'`
    Timestamp(String),
    /// `NUMERIC 'text'`
    Numeric(String),
    /// `JSON 'text'`
    Json(String),
}

impl Literal {
    /// Short name of the literal kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "bool",
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::Numeric(_) => "numeric",
            Self::Json(_) => "json",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Boolean(true) => write!(f, "TRUE"),
            Self::Boolean(false) => write!(f, "FALSE"),
            Self::Integer(int) => write!(f, "{}", int),
            Self::Float(float) => write!(f, "{}", float.text),
            Self::String(s) => write_quoted(f, s),
            Self::Bytes(bytes) => {
                write!(f, "b\"")?;
                for &b in bytes {
                    match b {
                        b'"' => write!(f, "\\\"")?,
                        b'\\' => write!(f, "\\\\")?,
                        0x20..=0x7e => write!(f, "{}", b as char)?,
                        _ => write!(f, "\\x{:02x}", b)?,
                    }
                }
                write!(f, "\"")
            }
            Self::Date(text) => {
                write!(f, "DATE ")?;
                write_quoted(f, text)
            }
            Self::Timestamp(text) => {
                write!(f, "TIMESTAMP ")?;
                write_quoted(f, text)
            }
            Self::Numeric(text) => {
                write!(f, "NUMERIC ")?;
                write_quoted(f, text)
            }
            Self::Json(text) => {
                write!(f, "JSON ")?;
                write_quoted(f, text)
            }
        }
    }
}

/// Integer literal text and radix
///
/// `text` holds the optional sign and the digits without any `0x` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerLiteral {
    pub text: String,
    pub radix: u32,
}

impl IntegerLiteral {
    pub fn decimal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            radix: 10,
        }
    }

    pub fn hex(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            radix: 16,
        }
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.radix == 16 {
            let (sign, digits) = match self.text.strip_prefix(['-', '+']) {
                Some(rest) => (&self.text[..1], rest),
                None => ("", self.text.as_str()),
            };
            write!(f, "{}0x{}", sign, digits)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatLiteral {
    pub text: String,
}

impl FloatLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_sql() {
        assert_eq!(Literal::Null.to_string(), "NULL");
        assert_eq!(Literal::Integer(IntegerLiteral::hex("-1F")).to_string(), "-0x1F");
        assert_eq!(Literal::String("a\"b\n".into()).to_string(), r#""a\"b\n""#);
        assert_eq!(Literal::Bytes(vec![b'h', 0]).to_string(), r#"b"h\x00""#);
        assert_eq!(
            Literal::Date("1970-01-01".into()).to_string(),
            r#"DATE "1970-01-01""#
        );
    }
}
