//! sqlparam diagnostics and error handling
//!
//! This crate provides the error taxonomy shared by every stage of the codec:
//! error codes, source locations for syntax errors, and diagnostic reporting.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
