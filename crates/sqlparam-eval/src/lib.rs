//! sqlparam evaluation
//!
//! This crate turns parsed SQL fragments into typed values and back into
//! display strings:
//!
//! - **Type Resolver** (`resolve_type`): type syntax to a typed NULL placeholder
//! - **Literal Evaluator** (`evaluate`): literal syntax to a typed value
//! - **Type Unifier** (`unify`): field typing for struct literals
//! - **Parameter Map Builder** (`ParamBuilder`): named fragments to a parameter map
//! - **Value Formatter** (`format_value`): typed values to display strings
//!
//! # Example
//!
//! ```
//! use sqlparam_eval::{ParamBuilder, format_typed};
//!
//! let params = ParamBuilder::new(true)
//!     .build([("limit", "10"), ("names", "ARRAY<STRING>")])
//!     .unwrap();
//! assert_eq!(params["limit"].ty.to_string(), "INT64");
//! assert_eq!(format_typed(&params["names"]).unwrap(), "<null>");
//! ```

pub mod format;
pub mod literal;
pub mod params;
pub mod resolver;
pub mod unify;

pub use format::{NULL_SENTINEL, format_typed, format_value};
pub use literal::evaluate;
pub use params::{ParamBuilder, SilentLog, build_params};
pub use resolver::{resolve, resolve_type};
