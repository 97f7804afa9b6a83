//! Conversion from a field tree to a schema document
//!
//! Encoding is total: every field list, including empty lists, blank names
//! and objects without children, produces a document. Payload that does not
//! belong to a field's type cannot be represented in [`FieldKind`], so there
//! is nothing to reject.

use formschema_tree::{Field, FieldKind, FieldType};
use indexmap::IndexMap;
use tracing::debug;

use crate::schema::*;

/// Encode a field list as a schema document.
///
/// Properties keep input order. Siblings sharing a name collapse into one
/// property: the later field's schema replaces the earlier one in place.
/// `required` lists each required name once, in first-appearance order.
pub fn encode(fields: &[Field]) -> SchemaDocument {
    encode_object(fields, TypeSpec::new(JsonType::Object))
}

fn encode_object(fields: &[Field], ty: TypeSpec) -> ObjectSchema {
    let mut properties = IndexMap::with_capacity(fields.len());
    let mut required: Vec<String> = Vec::new();

    for field in fields {
        let schema = encode_property(field);
        if properties.insert(field.name.clone(), schema).is_some() {
            debug!(name = %field.name, "duplicate sibling name, later field wins");
        }
        if field.required && !required.contains(&field.name) {
            required.push(field.name.clone());
        }
    }

    ObjectSchema {
        ty,
        properties,
        required,
    }
}

fn encode_property(field: &Field) -> PropertySchema {
    let nullable = field.allow_null;
    match &field.kind {
        FieldKind::String | FieldKind::Unknown { .. } => scalar(JsonType::String, nullable),
        FieldKind::Number => scalar(JsonType::Number, nullable),
        FieldKind::Boolean => scalar(JsonType::Boolean, nullable),
        FieldKind::Object { children } => PropertySchema::Object(encode_object(
            children,
            TypeSpec::with_null(JsonType::Object, nullable),
        )),
        FieldKind::Array {
            item_type,
            item_fields,
        } => PropertySchema::Array(ArraySchema {
            ty: TypeSpec::with_null(JsonType::Array, nullable),
            items: Some(Box::new(encode_items(*item_type, item_fields, nullable))),
        }),
        FieldKind::Enum { values } => PropertySchema::Enum(EnumSchema {
            ty: TypeSpec::with_null(JsonType::String, nullable),
            values: values.as_slice().to_vec(),
        }),
    }
}

/// Schema of array items. Scalar items inherit the array's nullability;
/// object items are always a plain object schema. Enum items carry an empty
/// `enum` list, since item literals are not part of the field tree.
fn encode_items(item_type: FieldType, item_fields: &[Field], nullable: bool) -> PropertySchema {
    match item_type {
        FieldType::Object => PropertySchema::Object(encode_object(
            item_fields,
            TypeSpec::new(JsonType::Object),
        )),
        FieldType::Enum => PropertySchema::Enum(EnumSchema {
            ty: TypeSpec::with_null(JsonType::String, nullable),
            values: Vec::new(),
        }),
        FieldType::String => scalar(JsonType::String, nullable),
        FieldType::Number => scalar(JsonType::Number, nullable),
        FieldType::Boolean => scalar(JsonType::Boolean, nullable),
        FieldType::Array => scalar(JsonType::Array, nullable),
    }
}

fn scalar(ty: JsonType, nullable: bool) -> PropertySchema {
    PropertySchema::Scalar(ScalarSchema {
        ty: TypeSpec::with_null(ty, nullable),
    })
}
