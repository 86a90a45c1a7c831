//! Literal evaluation: literal syntax to a typed value

use crate::resolver::resolve;
use crate::unify::{FieldSlot, assemble};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sqlparam_ast::{
    ArrayExpr, Expression, FloatLiteral, IntegerLiteral, Literal, StructExpr,
};
use sqlparam_diagnostics::{CodecError, Result};
use sqlparam_types::{Type, TypedValue, Value};

/// Evaluate a literal expression into its type and value
///
/// | Literal    | Type      | Value                          |
/// |------------|-----------|--------------------------------|
/// | NULL       | INT64     | null                           |
/// | bool       | BOOL      | bool                           |
/// | integer    | INT64     | decimal text of the integer    |
/// | float      | FLOAT64   | number                         |
/// | string     | STRING    | the string                     |
/// | bytes      | BYTES     | standard base64 of the bytes   |
/// | DATE, TIMESTAMP, NUMERIC, JSON | same | the literal's text |
pub fn evaluate(expr: &Expression) -> Result<TypedValue> {
    match expr {
        Expression::Literal(literal) => evaluate_literal(literal),
        Expression::Array(array) => evaluate_array(array),
        Expression::Struct(structure) => evaluate_struct(structure),
        Expression::Paren(_) | Expression::Path(_) | Expression::Parameter(_) => Err(
            CodecError::unsupported_literal(expr.kind(), expr.to_string()),
        ),
    }
}

fn evaluate_literal(literal: &Literal) -> Result<TypedValue> {
    let typed = match literal {
        // Untyped NULL has no type of its own; INT64 stands in
        Literal::Null => TypedValue::null(Type::Int64),
        Literal::Boolean(b) => TypedValue::new(Type::Bool, *b),
        Literal::Integer(int) => TypedValue::new(Type::Int64, parse_integer(int)?.to_string()),
        Literal::Float(float) => TypedValue::new(Type::Float64, parse_float(float)?),
        Literal::String(s) => TypedValue::new(Type::String, s.as_str()),
        Literal::Bytes(bytes) => TypedValue::new(Type::Bytes, STANDARD.encode(bytes)),
        Literal::Date(text) => TypedValue::new(Type::Date, text.as_str()),
        Literal::Timestamp(text) => TypedValue::new(Type::Timestamp, text.as_str()),
        Literal::Numeric(text) => TypedValue::new(Type::Numeric, text.as_str()),
        Literal::Json(text) => TypedValue::new(Type::Json, text.as_str()),
    };
    Ok(typed)
}

/// Parse integer literal text in its radix
pub fn parse_integer(int: &IntegerLiteral) -> Result<i64> {
    i64::from_str_radix(&int.text, int.radix)
        .map_err(|err| CodecError::numeric_parse(int.to_string(), err))
}

/// Parse float literal text; values beyond the f64 range are rejected
pub fn parse_float(float: &FloatLiteral) -> Result<f64> {
    let value = float
        .text
        .parse::<f64>()
        .map_err(|err| CodecError::numeric_parse(float.text.as_str(), err))?;
    if value.is_infinite() {
        return Err(CodecError::numeric_parse(
            float.text.as_str(),
            "value out of range",
        ));
    }
    Ok(value)
}

/// Element type: the annotation if any, else the first element's type
fn evaluate_array(array: &ArrayExpr) -> Result<TypedValue> {
    let mut element_type = array.element_type.as_ref().map(resolve).transpose()?;
    let mut values = Vec::with_capacity(array.elements.len());
    for element in &array.elements {
        let typed = evaluate(element)?;
        if element_type.is_none() {
            element_type = Some(typed.ty);
        }
        values.push(typed.value);
    }
    Ok(TypedValue::new(
        Type::Array(element_type.map(Box::new)),
        Value::List(values),
    ))
}

fn evaluate_struct(structure: &StructExpr) -> Result<TypedValue> {
    let slots = match structure {
        StructExpr::Typeless(typeless) => typeless
            .args
            .iter()
            .map(|arg| {
                let name = arg
                    .alias
                    .as_ref()
                    .map(|alias| alias.name.clone())
                    .unwrap_or_default();
                Ok(FieldSlot::new(name, None, evaluate(&arg.expr)?))
            })
            .collect::<Result<Vec<_>>>()?,
        StructExpr::Tuple(tuple) => tuple
            .values
            .iter()
            .map(|value| Ok(FieldSlot::new("", None, evaluate(value)?)))
            .collect::<Result<Vec<_>>>()?,
        // Every value is evaluated; declared fields then pair up with the
        // values to the shorter of the two
        StructExpr::Typed(typed) => {
            let values = typed
                .values
                .iter()
                .map(evaluate)
                .collect::<Result<Vec<_>>>()?;
            typed
                .fields
                .iter()
                .zip(values)
                .map(|(field, value)| {
                    let name = field
                        .name
                        .as_ref()
                        .map(|name| name.name.clone())
                        .unwrap_or_default();
                    let declared = field.field_type.as_deref().map(resolve).transpose()?;
                    Ok(FieldSlot::new(name, declared, value))
                })
                .collect::<Result<Vec<_>>>()?
        }
    };
    Ok(assemble(slots))
}
