//! Parameter types and their wire representation

use serde::{Deserialize, Serialize};
use sqlparam_diagnostics::CodecError;
use std::fmt;

/// Wire type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    Unspecified,
    Bool,
    Int64,
    Float32,
    Float64,
    Timestamp,
    Date,
    String,
    Bytes,
    Array,
    Struct,
    Numeric,
    Json,
}

impl TypeCode {
    /// All codes in wire enumeration order
    pub const ALL: [TypeCode; 13] = [
        Self::Unspecified,
        Self::Bool,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::Timestamp,
        Self::Date,
        Self::String,
        Self::Bytes,
        Self::Array,
        Self::Struct,
        Self::Numeric,
        Self::Json,
    ];

    /// Get the wire name of the code
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unspecified => "TYPE_CODE_UNSPECIFIED",
            Self::Bool => "BOOL",
            Self::Int64 => "INT64",
            Self::Float32 => "FLOAT32",
            Self::Float64 => "FLOAT64",
            Self::Timestamp => "TIMESTAMP",
            Self::Date => "DATE",
            Self::String => "STRING",
            Self::Bytes => "BYTES",
            Self::Array => "ARRAY",
            Self::Struct => "STRUCT",
            Self::Numeric => "NUMERIC",
            Self::Json => "JSON",
        }
    }

    /// Look up a code by its exact wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.name() == name)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A parameter type
///
/// The array element type is optional only to represent the untyped empty
/// array literal `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireType", into = "WireType")]
pub enum Type {
    Bool,
    Int64,
    Float32,
    Float64,
    String,
    Bytes,
    Date,
    Timestamp,
    Numeric,
    Json,
    Array(Option<Box<Type>>),
    Struct(Vec<StructField>),
}

impl Type {
    /// `ARRAY<element>`
    pub fn array(element: Type) -> Self {
        Self::Array(Some(Box::new(element)))
    }

    /// `ARRAY<>`, the type of an empty untyped array literal
    pub fn untyped_array() -> Self {
        Self::Array(None)
    }

    pub fn structure(fields: Vec<StructField>) -> Self {
        Self::Struct(fields)
    }

    /// Resolve a scalar type keyword (case-insensitive)
    pub fn from_keyword(name: &str) -> Option<Self> {
        let ty = match name.to_ascii_uppercase().as_str() {
            "BOOL" => Self::Bool,
            "INT64" => Self::Int64,
            "FLOAT32" => Self::Float32,
            "FLOAT64" => Self::Float64,
            "STRING" => Self::String,
            "BYTES" => Self::Bytes,
            "DATE" => Self::Date,
            "TIMESTAMP" => Self::Timestamp,
            "NUMERIC" => Self::Numeric,
            "JSON" => Self::Json,
            _ => return None,
        };
        Some(ty)
    }

    pub const fn code(&self) -> TypeCode {
        match self {
            Self::Bool => TypeCode::Bool,
            Self::Int64 => TypeCode::Int64,
            Self::Float32 => TypeCode::Float32,
            Self::Float64 => TypeCode::Float64,
            Self::String => TypeCode::String,
            Self::Bytes => TypeCode::Bytes,
            Self::Date => TypeCode::Date,
            Self::Timestamp => TypeCode::Timestamp,
            Self::Numeric => TypeCode::Numeric,
            Self::Json => TypeCode::Json,
            Self::Array(_) => TypeCode::Array,
            Self::Struct(_) => TypeCode::Struct,
        }
    }

    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Struct(_))
    }

    /// Element type of an array, if present
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Self::Array(element) => element.as_deref(),
            _ => None,
        }
    }

    /// Fields of a struct, empty for any other type
    pub fn fields(&self) -> &[StructField] {
        match self {
            Self::Struct(fields) => fields,
            _ => &[],
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(Some(element)) => write!(f, "ARRAY<{}>", element),
            Self::Array(None) => write!(f, "ARRAY<>"),
            Self::Struct(fields) => {
                write!(f, "STRUCT<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", field)?;
                }
                write!(f, ">")
            }
            scalar => write!(f, "{}", scalar.code()),
        }
    }
}

/// A struct field; `name` is empty for positional fields
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructField {
    pub name: String,
    pub field_type: Type,
}

impl StructField {
    pub fn new(name: impl Into<String>, field_type: Type) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    pub fn positional(field_type: Type) -> Self {
        Self::new(String::new(), field_type)
    }
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.field_type)
        } else {
            write!(f, "{} {}", self.name, self.field_type)
        }
    }
}

/// Protobuf-JSON shape of a type: `{"code": "ARRAY", "arrayElementType": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireType {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_element_type: Option<Box<WireType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_type: Option<WireStructType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireStructType {
    #[serde(default)]
    pub fields: Vec<WireStructField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireStructField {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<WireType>,
}

impl WireType {
    fn scalar(code: TypeCode) -> Self {
        Self {
            code: code.name().to_string(),
            array_element_type: None,
            struct_type: None,
        }
    }
}

impl From<Type> for WireType {
    fn from(ty: Type) -> Self {
        let mut wire = WireType::scalar(ty.code());
        match ty {
            Type::Array(element) => {
                wire.array_element_type = element.map(|e| Box::new(WireType::from(*e)));
            }
            Type::Struct(fields) => {
                let fields = fields
                    .into_iter()
                    .map(|field| WireStructField {
                        name: field.name,
                        field_type: Some(field.field_type.into()),
                    })
                    .collect();
                wire.struct_type = Some(WireStructType { fields });
            }
            _ => {}
        }
        wire
    }
}

impl TryFrom<WireType> for Type {
    type Error = CodecError;

    fn try_from(wire: WireType) -> Result<Self, Self::Error> {
        let code = TypeCode::from_name(&wire.code)
            .ok_or_else(|| CodecError::unknown_type_code(wire.code.as_str()))?;

        let ty = match code {
            TypeCode::Unspecified => return Err(CodecError::unknown_type_code(code.name())),
            TypeCode::Bool => Type::Bool,
            TypeCode::Int64 => Type::Int64,
            TypeCode::Float32 => Type::Float32,
            TypeCode::Float64 => Type::Float64,
            TypeCode::Timestamp => Type::Timestamp,
            TypeCode::Date => Type::Date,
            TypeCode::String => Type::String,
            TypeCode::Bytes => Type::Bytes,
            TypeCode::Numeric => Type::Numeric,
            TypeCode::Json => Type::Json,
            TypeCode::Array => {
                let element = wire
                    .array_element_type
                    .map(|element| Type::try_from(*element))
                    .transpose()?;
                Type::Array(element.map(Box::new))
            }
            TypeCode::Struct => {
                let wire_fields = wire.struct_type.map(|s| s.fields).unwrap_or_default();
                let mut fields = Vec::with_capacity(wire_fields.len());
                for (i, field) in wire_fields.into_iter().enumerate() {
                    let Some(field_type) = field.field_type else {
                        return Err(CodecError::missing_element_type(format!(
                            "struct field {}",
                            if field.name.is_empty() {
                                i.to_string()
                            } else {
                                field.name
                            }
                        )));
                    };
                    fields.push(StructField::new(field.name, Type::try_from(field_type)?));
                }
                Type::Struct(fields)
            }
        };
        Ok(ty)
    }
}
