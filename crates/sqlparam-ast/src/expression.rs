//! Expression nodes
//!
//! Only literal forms carry meaning for parameter binding. Paths, query
//! parameters and parenthesized expressions are still recognised by the
//! frontend so that evaluation can reject them by name.

use crate::{Identifier, Literal, StructFieldSpecifier, TypeSpecifier, write_comma_separated};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal expression syntax tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Scalar literal
    Literal(Literal),
    /// `[..]`, `ARRAY[..]`, `ARRAY<T>[..]`
    Array(ArrayExpr),
    /// Any of the three struct literal forms
    Struct(StructExpr),
    /// `(expr)`
    Paren(Box<Expression>),
    /// `a.b.c`
    Path(Vec<Identifier>),
    /// `@name`
    Parameter(Identifier),
}

impl Expression {
    pub fn literal(literal: Literal) -> Self {
        Self::Literal(literal)
    }

    /// Short name of the node kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(literal) => literal.kind(),
            Self::Array(_) => "array",
            Self::Struct(StructExpr::Typeless(_)) => "typeless struct",
            Self::Struct(StructExpr::Tuple(_)) => "tuple struct",
            Self::Struct(StructExpr::Typed(_)) => "typed struct",
            Self::Paren(_) => "parenthesized expression",
            Self::Path(_) => "identifier",
            Self::Parameter(_) => "query parameter",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{}", literal),
            Self::Array(array) => write!(f, "{}", array),
            Self::Struct(structure) => write!(f, "{}", structure),
            Self::Paren(inner) => write!(f, "({})", inner),
            Self::Path(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", segment)?;
                }
                Ok(())
            }
            Self::Parameter(name) => write!(f, "@{}", name),
        }
    }
}

/// Array literal with optional element type annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpr {
    pub element_type: Option<TypeSpecifier>,
    pub elements: Vec<Expression>,
}

impl ArrayExpr {
    pub fn new(element_type: Option<TypeSpecifier>, elements: Vec<Expression>) -> Self {
        Self {
            element_type,
            elements,
        }
    }
}

impl fmt::Display for ArrayExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element_type) = &self.element_type {
            write!(f, "ARRAY<{}>", element_type)?;
        }
        write!(f, "[")?;
        write_comma_separated(f, &self.elements)?;
        write!(f, "]")
    }
}

/// The three struct literal surface forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StructExpr {
    /// `STRUCT(expr, expr AS alias)`
    Typeless(TypelessStructExpr),
    /// `(expr, expr)`
    Tuple(TupleStructExpr),
    /// `STRUCT<name T, ...>(expr, ...)`
    Typed(TypedStructExpr),
}

impl fmt::Display for StructExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typeless(typeless) => {
                write!(f, "STRUCT(")?;
                write_comma_separated(f, &typeless.args)?;
                write!(f, ")")
            }
            Self::Tuple(tuple) => {
                write!(f, "(")?;
                write_comma_separated(f, &tuple.values)?;
                write!(f, ")")
            }
            Self::Typed(typed) => {
                write!(f, "STRUCT<")?;
                write_comma_separated(f, &typed.fields)?;
                write!(f, ">(")?;
                write_comma_separated(f, &typed.values)?;
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypelessStructExpr {
    pub args: Vec<StructArg>,
}

/// Argument of a typeless struct literal, optionally aliased
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructArg {
    pub expr: Expression,
    pub alias: Option<Identifier>,
}

impl StructArg {
    pub fn new(expr: Expression) -> Self {
        Self { expr, alias: None }
    }

    pub fn aliased(expr: Expression, alias: impl Into<Identifier>) -> Self {
        Self {
            expr,
            alias: Some(alias.into()),
        }
    }
}

impl fmt::Display for StructArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} AS {}", self.expr, alias),
            None => write!(f, "{}", self.expr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleStructExpr {
    pub values: Vec<Expression>,
}

/// Typed struct literal; `fields` and `values` may differ in length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedStructExpr {
    pub fields: Vec<StructFieldSpecifier>,
    pub values: Vec<Expression>,
}
