//! sqlparam type system
//!
//! This crate defines the wire-level model shared by every codec stage:
//! - `Type`: the closed set of parameter types and their type codes
//! - `Value`: the JSON-shaped payload carried alongside a type
//! - `TypedValue`: the `(Type, Value)` pair produced for each parameter

pub mod type_system;
pub mod value;

pub use type_system::*;
pub use value::*;
