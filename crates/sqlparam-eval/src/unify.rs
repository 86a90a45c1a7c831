//! Struct field type unification
//!
//! A declared field type is authoritative; an undeclared one takes the
//! evaluated value's type verbatim. Values are never coerced.

use sqlparam_types::{StructField, Type, TypedValue, Value};

/// A struct member awaiting its final field type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSlot {
    pub name: String,
    pub declared: Option<Type>,
    pub value: TypedValue,
}

impl FieldSlot {
    pub fn new(name: impl Into<String>, declared: Option<Type>, value: TypedValue) -> Self {
        Self {
            name: name.into(),
            declared,
            value,
        }
    }

    pub fn unify(self) -> (StructField, Value) {
        let field_type = self.declared.unwrap_or(self.value.ty);
        (StructField::new(self.name, field_type), self.value.value)
    }
}

/// Build a struct from its members, in order
pub fn assemble(slots: impl IntoIterator<Item = FieldSlot>) -> TypedValue {
    let (fields, values): (Vec<_>, Vec<_>) = slots.into_iter().map(FieldSlot::unify).unzip();
    TypedValue::new(Type::Struct(fields), Value::List(values))
}
