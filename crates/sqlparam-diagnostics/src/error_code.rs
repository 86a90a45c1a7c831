//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - SP0001-SP0099: Syntax errors (type and literal grammars)
//! - SP0100-SP0199: Type errors (resolution, wire type codes)
//! - SP0200-SP0299: Value errors (literal evaluation, formatting)
//! - SP0300-SP0399: Parameter errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    pub const fn is_syntax_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    pub const fn is_type_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    pub const fn is_value_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    pub const fn is_param_error(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SP{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Syntax errors (0001-0099)
    map.insert(1, ErrorInfo::new("Invalid type syntax"));
    map.insert(2, ErrorInfo::new("Invalid literal syntax")
        .with_help("Parameters accept literals only: NULL, TRUE, 42, 1.5, 'text', b'bytes', DATE '...', [..], STRUCT(..), (.., ..)"));

    // Type errors (0100-0199)
    map.insert(100, ErrorInfo::new("Unknown type name")
        .with_help("Supported types: BOOL, INT64, FLOAT32, FLOAT64, STRING, BYTES, DATE, TIMESTAMP, NUMERIC, JSON, ARRAY<T>, STRUCT<...>"));
    map.insert(101, ErrorInfo::new("Unknown type code"));
    map.insert(102, ErrorInfo::new("Missing element type"));

    // Value errors (0200-0299)
    map.insert(200, ErrorInfo::new("Invalid numeric literal"));
    map.insert(201, ErrorInfo::new("Unsupported literal")
        .with_help("Only literal expressions can be bound as parameters"));
    map.insert(202, ErrorInfo::new("Value does not match its type"));

    // Parameter errors (0300-0399)
    map.insert(300, ErrorInfo::new("Invalid parameter"));

    map
});

// Syntax errors
pub const SP0001: ErrorCode = ErrorCode::new(1);
pub const SP0002: ErrorCode = ErrorCode::new(2);

// Type errors
pub const SP0100: ErrorCode = ErrorCode::new(100);
pub const SP0101: ErrorCode = ErrorCode::new(101);
pub const SP0102: ErrorCode = ErrorCode::new(102);

// Value errors
pub const SP0200: ErrorCode = ErrorCode::new(200);
pub const SP0201: ErrorCode = ErrorCode::new(201);
pub const SP0202: ErrorCode = ErrorCode::new(202);

// Parameter errors
pub const SP0300: ErrorCode = ErrorCode::new(300);
