//! Conversion from a schema document back to a field tree
//!
//! Decoding is best-effort and never fails. It reads any JSON value and keeps
//! whatever it can recognize: missing keys fall back to defaults, an
//! unrecognized `type` becomes [`FieldKind::Unknown`], and nesting deeper
//! than the configured limit is cut off with an empty payload.

use formschema_tree::{EnumValues, Field, FieldKind, FieldType};
use serde_json::Value;
use tracing::warn;

/// Default nesting limit for object and array-of-object payloads.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Decode a schema document with the default depth limit.
pub fn decode(doc: &Value) -> Vec<Field> {
    decode_with_depth(doc, DEFAULT_MAX_DEPTH)
}

/// Decode a schema document, truncating nesting beyond `max_depth` levels.
pub fn decode_with_depth(doc: &Value, max_depth: usize) -> Vec<Field> {
    Decoder { max_depth }.object_fields(doc, 0)
}

struct Decoder {
    max_depth: usize,
}

impl Decoder {
    /// Fields of an object schema's `properties`, in document order.
    fn object_fields(&self, schema: &Value, depth: usize) -> Vec<Field> {
        let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
            return Vec::new();
        };
        let required: Vec<&str> = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        properties
            .iter()
            .map(|(name, property)| {
                self.property(name, property, depth)
                    .with_required(required.contains(&name.as_str()))
            })
            .collect()
    }

    fn property(&self, name: &str, property: &Value, depth: usize) -> Field {
        let (effective, nullable) = read_type(property.get("type"));

        if let Some(values) = property.get("enum") {
            let values: EnumValues = values
                .as_array()
                .map(|literals| literals.iter().map(enum_literal).collect())
                .unwrap_or_default();
            return Field::new(name, FieldKind::Enum { values }).with_allow_null(nullable);
        }

        let kind = match effective {
            None | Some("string") => FieldKind::String,
            Some("number") => FieldKind::Number,
            Some("boolean") => FieldKind::Boolean,
            Some("object") => FieldKind::Object {
                children: self.nested(name, property, depth),
            },
            Some("array") => self.array(name, property, depth),
            Some(other) => {
                warn!(field = name, ty = other, "unrecognized type, treating as string");
                FieldKind::Unknown {
                    original: other.to_string(),
                }
            }
        };
        Field::new(name, kind).with_allow_null(nullable)
    }

    fn array(&self, name: &str, property: &Value, depth: usize) -> FieldKind {
        let Some(items) = property.get("items") else {
            return FieldKind::empty(FieldType::Array);
        };
        let item_type = if items.get("enum").is_some() {
            FieldType::Enum
        } else {
            match read_type(items.get("type")).0 {
                Some("number") => FieldType::Number,
                Some("boolean") => FieldType::Boolean,
                Some("object") => FieldType::Object,
                Some("array") => FieldType::Array,
                _ => FieldType::String,
            }
        };
        let item_fields = if item_type == FieldType::Object {
            self.nested(name, items, depth)
        } else {
            Vec::new()
        };
        FieldKind::Array {
            item_type,
            item_fields,
        }
    }

    fn nested(&self, name: &str, schema: &Value, depth: usize) -> Vec<Field> {
        if depth >= self.max_depth {
            warn!(
                field = name,
                max_depth = self.max_depth,
                "nesting limit reached, dropping nested fields"
            );
            return Vec::new();
        }
        self.object_fields(schema, depth + 1)
    }
}

/// Effective type name and nullability of a `type` keyword.
///
/// A bare string is non-nullable. An array is nullable iff it lists `"null"`,
/// and its effective type is the first other string member.
fn read_type(ty: Option<&Value>) -> (Option<&str>, bool) {
    match ty {
        Some(Value::String(name)) => (Some(name.as_str()), false),
        Some(Value::Array(members)) => {
            let nullable = members.iter().any(|m| m.as_str() == Some("null"));
            let effective = members
                .iter()
                .filter_map(Value::as_str)
                .find(|m| *m != "null");
            (effective, nullable)
        }
        _ => (None, false),
    }
}

fn enum_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
