//! Schema document representation as Rust ADT
//!
//! The document is a constrained subset of JSON Schema: objects with
//! `properties`/`required`, arrays with `items`, string enums, and the three
//! scalar types. Nullability is spelled as a two-element `type` array
//! (`["number", "null"]`) rather than a separate flag.

use core::fmt::{self, Display};

use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// JSON type names that can appear in a `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl JsonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::Null => "null",
        }
    }
}

impl Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` keyword: a bare type name, or `[type, "null"]` when nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    pub ty: JsonType,
    pub nullable: bool,
}

impl TypeSpec {
    pub fn new(ty: JsonType) -> Self {
        Self {
            ty,
            nullable: false,
        }
    }

    pub fn with_null(ty: JsonType, nullable: bool) -> Self {
        Self { ty, nullable }
    }
}

impl Serialize for TypeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.nullable {
            let mut seq = serializer.serialize_seq(Some(2))?;
            seq.serialize_element(&self.ty)?;
            seq.serialize_element(&JsonType::Null)?;
            seq.end()
        } else {
            self.ty.serialize(serializer)
        }
    }
}

/// A whole schema document. Always an object at the top level.
pub type SchemaDocument = ObjectSchema;

/// Schema of a single property.
///
/// Serialized untagged: the variant is recognizable by its keys
/// (`enum`, `properties`, `items`, or only `type`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertySchema {
    Enum(EnumSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    Scalar(ScalarSchema),
}

/// `{ "type": T }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarSchema {
    #[serde(rename = "type")]
    pub ty: TypeSpec,
}

/// `{ "type": "string", "enum": [...] }`
///
/// Enum values are always strings, whether or not the slot is nullable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumSchema {
    #[serde(rename = "type")]
    pub ty: TypeSpec,

    #[serde(rename = "enum")]
    pub values: Vec<String>,
}

/// `{ "type": "object", "properties": {...}, "required": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSchema {
    #[serde(rename = "type")]
    pub ty: TypeSpec,

    pub properties: IndexMap<String, PropertySchema>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ObjectSchema {
    /// An empty, non-nullable object schema.
    pub fn new() -> Self {
        Self {
            ty: TypeSpec::new(JsonType::Object),
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }

    /// Convert to a generic JSON value.
    pub fn to_value(&self) -> serde_json::Value {
        // Only string keys and plain data: serialization into a Value cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// `{ "type": "array", "items": {...} }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArraySchema {
    #[serde(rename = "type")]
    pub ty: TypeSpec,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
}
