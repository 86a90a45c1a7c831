//! Type resolution: type syntax to a typed NULL placeholder

use sqlparam_ast::{StructFieldSpecifier, TypeSpecifier};
use sqlparam_diagnostics::{CodecError, Result};
use sqlparam_types::{StructField, Type, TypedValue, Value};

/// Resolve type syntax into its type and placeholder value
///
/// Scalars and arrays pair with `Null`; a struct pairs with a list holding
/// one `Null` per declared field.
pub fn resolve_type(spec: &TypeSpecifier) -> Result<TypedValue> {
    match spec {
        TypeSpecifier::Named(named) => Type::from_keyword(&named.name.name)
            .map(TypedValue::null)
            .ok_or_else(|| CodecError::unknown_type_name(named.name.name.as_str())),
        TypeSpecifier::Array(array) => {
            let element = array
                .element_type
                .as_deref()
                .ok_or_else(|| CodecError::missing_element_type("ARRAY"))?;
            Ok(TypedValue::null(Type::array(resolve(element)?)))
        }
        TypeSpecifier::Struct(structure) => {
            let fields = structure
                .fields
                .iter()
                .enumerate()
                .map(|(i, field)| resolve_field(i, field))
                .collect::<Result<Vec<_>>>()?;
            let values = vec![Value::Null; fields.len()];
            Ok(TypedValue::new(Type::Struct(fields), Value::List(values)))
        }
    }
}

/// Resolve type syntax, keeping only the type
pub fn resolve(spec: &TypeSpecifier) -> Result<Type> {
    resolve_type(spec).map(|typed| typed.ty)
}

fn resolve_field(index: usize, field: &StructFieldSpecifier) -> Result<StructField> {
    let name = field
        .name
        .as_ref()
        .map(|name| name.name.clone())
        .unwrap_or_default();
    let Some(field_type) = field.field_type.as_deref() else {
        let label = if name.is_empty() { index.to_string() } else { name };
        return Err(CodecError::missing_element_type(format!(
            "STRUCT field {}",
            label
        )));
    };
    Ok(StructField::new(name, resolve(field_type)?))
}
