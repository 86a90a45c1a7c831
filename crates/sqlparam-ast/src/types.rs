//! Type specifier nodes

use crate::{Identifier, write_comma_separated};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type specifier (e.g. `INT64`, `ARRAY<STRING>`, `STRUCT<x INT64, y STRING>`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeSpecifier {
    /// Scalar type referenced by name
    Named(NamedTypeSpecifier),
    /// `ARRAY<T>`
    Array(ArrayTypeSpecifier),
    /// `STRUCT<...>`
    Struct(StructTypeSpecifier),
}

impl TypeSpecifier {
    pub fn named(name: impl Into<Identifier>) -> Self {
        Self::Named(NamedTypeSpecifier::new(name))
    }

    pub fn array(element_type: TypeSpecifier) -> Self {
        Self::Array(ArrayTypeSpecifier::new(Some(element_type)))
    }

    pub fn structure(fields: Vec<StructFieldSpecifier>) -> Self {
        Self::Struct(StructTypeSpecifier::new(fields))
    }
}

impl fmt::Display for TypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{}", named),
            Self::Array(array) => write!(f, "{}", array),
            Self::Struct(structure) => write!(f, "{}", structure),
        }
    }
}

/// Scalar type name, optionally with a length annotation (`STRING(MAX)`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTypeSpecifier {
    pub name: Identifier,
    /// Accepted for `STRING`/`BYTES` column-style types and otherwise ignored
    pub length: Option<TypeLength>,
}

impl NamedTypeSpecifier {
    pub fn new(name: impl Into<Identifier>) -> Self {
        Self {
            name: name.into(),
            length: None,
        }
    }

    pub fn with_length(mut self, length: TypeLength) -> Self {
        self.length = Some(length);
        self
    }
}

impl fmt::Display for NamedTypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(length) = &self.length {
            write!(f, "({})", length)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeLength {
    Max,
    Fixed(u64),
}

impl fmt::Display for TypeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => write!(f, "MAX"),
            Self::Fixed(n) => write!(f, "{}", n),
        }
    }
}

/// `ARRAY<T>`; a bare `ARRAY` keeps `element_type` empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayTypeSpecifier {
    pub element_type: Option<Box<TypeSpecifier>>,
}

impl ArrayTypeSpecifier {
    pub fn new(element_type: Option<TypeSpecifier>) -> Self {
        Self {
            element_type: element_type.map(Box::new),
        }
    }
}

impl fmt::Display for ArrayTypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element_type {
            Some(element) => write!(f, "ARRAY<{}>", element),
            None => write!(f, "ARRAY"),
        }
    }
}

/// `STRUCT<field, ...>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructTypeSpecifier {
    pub fields: Vec<StructFieldSpecifier>,
}

impl StructTypeSpecifier {
    pub fn new(fields: Vec<StructFieldSpecifier>) -> Self {
        Self { fields }
    }
}

impl fmt::Display for StructTypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STRUCT<")?;
        write_comma_separated(f, &self.fields)?;
        write!(f, ">")
    }
}

/// A struct field declaration: `name T`, `T`, or (in typed struct literals) a bare `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructFieldSpecifier {
    pub name: Option<Identifier>,
    pub field_type: Option<Box<TypeSpecifier>>,
}

impl StructFieldSpecifier {
    pub fn new(name: Option<Identifier>, field_type: Option<TypeSpecifier>) -> Self {
        Self {
            name,
            field_type: field_type.map(Box::new),
        }
    }

    /// `name T`
    pub fn named(name: impl Into<Identifier>, field_type: TypeSpecifier) -> Self {
        Self::new(Some(name.into()), Some(field_type))
    }

    /// Positional field `T`
    pub fn positional(field_type: TypeSpecifier) -> Self {
        Self::new(None, Some(field_type))
    }
}

impl fmt::Display for StructFieldSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.field_type) {
            (Some(name), Some(ty)) => write!(f, "{} {}", name, ty),
            (Some(name), None) => write!(f, "{}", name),
            (None, Some(ty)) => write!(f, "{}", ty),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_specifier_sql() {
        let ty = TypeSpecifier::structure(vec![
            StructFieldSpecifier::named("x", TypeSpecifier::named("INT64")),
            StructFieldSpecifier::positional(TypeSpecifier::array(TypeSpecifier::named(
                "STRING",
            ))),
        ]);
        assert_eq!(ty.to_string(), "STRUCT<x INT64, ARRAY<STRING>>");
    }

    #[test]
    fn test_length_annotation_sql() {
        let ty = TypeSpecifier::Named(NamedTypeSpecifier::new("STRING").with_length(TypeLength::Max));
        assert_eq!(ty.to_string(), "STRING(MAX)");
        assert_eq!(
            TypeSpecifier::Array(ArrayTypeSpecifier::new(None)).to_string(),
            "ARRAY"
        );
    }
}
