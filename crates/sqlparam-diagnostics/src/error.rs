//! Codec error types

use crate::{
    ErrorCode, SourceLocation, Span, SP0001, SP0002, SP0100, SP0101, SP0102, SP0200, SP0201,
    SP0202, SP0300,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The grammar a fragment was parsed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grammar {
    /// Type expressions (`INT64`, `ARRAY<STRING>`, ...)
    Type,
    /// Literal expressions (`42`, `'foo'`, `[1, 2]`, ...)
    Literal,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Type => write!(f, "type"),
            Grammar::Literal => write!(f, "literal"),
        }
    }
}

/// A diagnostic message with location and help
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub location: Option<SourceLocation>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            help: code.info().help.map(str::to_string),
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} - {}", self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

/// Errors raised while converting between code fragments, typed values and display strings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// The fragment does not parse under the attempted grammar
    #[error("invalid {grammar} syntax at {location}: {message}")]
    Syntax {
        grammar: Grammar,
        message: String,
        fragment: String,
        location: SourceLocation,
    },

    /// A scalar type keyword with no type code
    #[error("unknown type name: {name}")]
    UnknownTypeName { name: String },

    /// A wire type code with no formatter or no mapping
    #[error("unknown type: {code}")]
    UnknownTypeCode { code: String },

    /// An array or struct type node without a required sub-type
    #[error("missing element type in {context}")]
    MissingElementType { context: String },

    /// Malformed integer or floating point literal text
    #[error("invalid numeric literal {literal}: {message}")]
    NumericParse { literal: String, message: String },

    /// A syntax node that has no literal evaluation rule
    #[error("unsupported literal ({kind}): {sql}")]
    UnsupportedLiteral { kind: String, sql: String },

    /// A value payload whose shape does not match the type it is decoded under
    #[error("failed to decode {found} as {expected}")]
    InvalidValue { expected: String, found: String },

    /// Any of the above, attributed to the parameter that caused it
    #[error("error on {name}: {source}")]
    Param {
        name: String,
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Create a syntax error pointing at a byte offset of `fragment`
    pub fn syntax(
        grammar: Grammar,
        fragment: impl Into<String>,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        let fragment = fragment.into();
        let location = SourceLocation::from_span(Span::point(offset), &fragment);
        Self::Syntax {
            grammar,
            message: message.into(),
            fragment,
            location,
        }
    }

    pub fn unknown_type_name(name: impl Into<String>) -> Self {
        Self::UnknownTypeName { name: name.into() }
    }

    pub fn unknown_type_code(code: impl Into<String>) -> Self {
        Self::UnknownTypeCode { code: code.into() }
    }

    pub fn missing_element_type(context: impl Into<String>) -> Self {
        Self::MissingElementType {
            context: context.into(),
        }
    }

    pub fn numeric_parse(literal: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::NumericParse {
            literal: literal.into(),
            message: message.to_string(),
        }
    }

    pub fn unsupported_literal(kind: impl Into<String>, sql: impl Into<String>) -> Self {
        Self::UnsupportedLiteral {
            kind: kind.into(),
            sql: sql.into(),
        }
    }

    pub fn invalid_value(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidValue {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Attribute this error to a named parameter
    pub fn in_param(self, name: impl Into<String>) -> Self {
        Self::Param {
            name: name.into(),
            source: Box::new(self),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax { grammar, .. } => match grammar {
                Grammar::Type => SP0001,
                Grammar::Literal => SP0002,
            },
            Self::UnknownTypeName { .. } => SP0100,
            Self::UnknownTypeCode { .. } => SP0101,
            Self::MissingElementType { .. } => SP0102,
            Self::NumericParse { .. } => SP0200,
            Self::UnsupportedLiteral { .. } => SP0201,
            Self::InvalidValue { .. } => SP0202,
            Self::Param { .. } => SP0300,
        }
    }

    /// Strip parameter attribution, returning the underlying cause
    pub fn root_cause(&self) -> &CodecError {
        match self {
            Self::Param { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Syntax { location, .. } => Some(location),
            Self::Param { source, .. } => source.location(),
            _ => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.to_string());
        if let Some(loc) = self.location() {
            diag = diag.with_location(loc.clone());
        }
        if let Some(help) = self.root_cause().code().info().help {
            diag = diag.with_help(help);
        }
        diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_location() {
        let err = CodecError::syntax(Grammar::Literal, "[1, ?]", 4, "expected literal");
        assert_eq!(err.code(), SP0002);
        assert_eq!(err.location().map(|l| l.column), Some(5));
        assert_eq!(
            err.to_string(),
            "invalid literal syntax at 1:5: expected literal"
        );
    }

    #[test]
    fn test_param_error_wraps_cause() {
        let err = CodecError::unknown_type_name("INT63").in_param("limit");
        assert_eq!(err.code(), SP0300);
        assert_eq!(err.root_cause().code(), SP0100);
        assert_eq!(err.to_string(), "error on limit: unknown type name: INT63");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_diagnostic_carries_root_help() {
        let diag = CodecError::unsupported_literal("identifier", "foo")
            .in_param("p")
            .to_diagnostic();
        assert_eq!(diag.code, SP0300);
        assert!(diag.help.is_some());
        assert!(diag.to_string().contains("SP0300"));
    }
}
