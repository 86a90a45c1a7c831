//! Parameter values
//!
//! A `Value` is the JSON-shaped payload that travels with a `Type`. Int64,
//! bytes, date, timestamp, numeric and json payloads are carried as strings;
//! a struct is a positional list of its field values, never a keyed map.

use crate::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the payload kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}

/// A type paired with its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedValue {
    #[serde(rename = "type")]
    pub ty: Type,
    pub value: Value,
}

impl TypedValue {
    pub fn new(ty: Type, value: impl Into<Value>) -> Self {
        Self {
            ty,
            value: value.into(),
        }
    }

    /// A typed NULL
    pub fn null(ty: Type) -> Self {
        Self {
            ty,
            value: Value::Null,
        }
    }

    /// Check the value against the shape of the type
    pub fn is_congruent(&self) -> bool {
        self.ty.is_congruent(&self.value)
    }
}

impl Type {
    /// Check that `value` has the shape this type requires
    ///
    /// Only list structure is checked: any non-list value fits a scalar type,
    /// an array takes `Null` or a list of fitting elements, and a struct takes
    /// a list with exactly one fitting element per field.
    pub fn is_congruent(&self, value: &Value) -> bool {
        match (self, value) {
            (Type::Array(_), Value::Null) => true,
            (Type::Array(None), Value::List(items)) => items.is_empty(),
            (Type::Array(Some(element)), Value::List(items)) => {
                items.iter().all(|item| element.is_congruent(item))
            }
            (Type::Struct(fields), Value::List(items)) => {
                fields.len() == items.len()
                    && fields
                        .iter()
                        .zip(items)
                        .all(|(field, item)| field.field_type.is_congruent(item))
            }
            (Type::Array(_) | Type::Struct(_), _) => false,
            (_, Value::List(_)) => false,
            _ => true,
        }
    }
}
