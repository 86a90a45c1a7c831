//! Typed-value codec for SQL query parameters
//!
//! This crate converts short SQL code fragments into typed query parameter
//! values and renders typed values back into display strings:
//! - Parsing type names (`INT64`, `ARRAY<STRING>`) and literals (`42`, `[1, 2]`)
//! - Resolving types to typed NULL placeholders
//! - Evaluating literals to `(Type, Value)` pairs
//! - Formatting typed values for display
//!
//! # Example
//!
//! ```
//! use sqlparam::{ParamBuilder, Type, format_typed};
//!
//! let params = ParamBuilder::new(true)
//!     .build([("ids", "[1, 2, 3]"), ("name", "STRING")])
//!     .unwrap();
//!
//! assert_eq!(params["ids"].ty, Type::array(Type::Int64));
//! assert_eq!(format_typed(&params["ids"]).unwrap(), "[1, 2, 3]");
//! assert_eq!(format_typed(&params["name"]).unwrap(), "<null>");
//! ```

// Re-export all public APIs from internal crates
pub use sqlparam_ast as ast;
pub use sqlparam_diagnostics as diagnostics;
pub use sqlparam_eval as eval;
pub use sqlparam_parser as parser;
pub use sqlparam_types as types;

// Convenience re-exports
pub use sqlparam_diagnostics::{CodecError, Result};
pub use sqlparam_eval::{
    NULL_SENTINEL, ParamBuilder, build_params, evaluate, format_typed, format_value, resolve_type,
};
pub use sqlparam_parser::{parse_expression, parse_type};
pub use sqlparam_types::{StructField, Type, TypeCode, TypedValue, Value};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
