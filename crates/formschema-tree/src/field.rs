//! Field nodes and single-attribute edits.

use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::enum_values::EnumValues;

/// Type discriminator without payload.
///
/// Used for an array's item type and wherever a form offers a type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Number,
    Boolean,
    Object,
    Array,
    Enum,
}

impl FieldType {
    pub const ALL: [FieldType; 6] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Object,
        FieldType::Array,
        FieldType::Enum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
            FieldType::Enum => "enum",
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a field together with the payload that type carries.
///
/// Payload for other types cannot exist, so switching type rebuilds the
/// payload from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Object {
        #[serde(default)]
        children: Vec<Field>,
    },
    Array {
        #[serde(rename = "itemType", default)]
        item_type: FieldType,
        /// Only meaningful while `item_type` is [`FieldType::Object`].
        #[serde(rename = "itemFields", default, skip_serializing_if = "Vec::is_empty")]
        item_fields: Vec<Field>,
    },
    Enum {
        #[serde(rename = "enumValues", default)]
        values: EnumValues,
    },
    /// A type name that was not recognized when the field was read.
    ///
    /// Behaves like a string field; the original spelling is kept for display.
    Unknown { original: String },
}

impl FieldKind {
    /// Empty payload for the given type.
    pub fn empty(ty: FieldType) -> Self {
        match ty {
            FieldType::String => FieldKind::String,
            FieldType::Number => FieldKind::Number,
            FieldType::Boolean => FieldKind::Boolean,
            FieldType::Object => FieldKind::Object {
                children: Vec::new(),
            },
            FieldType::Array => FieldKind::Array {
                item_type: FieldType::String,
                item_fields: Vec::new(),
            },
            FieldType::Enum => FieldKind::Enum {
                values: EnumValues::new(),
            },
        }
    }

    /// The discriminator of this kind. `Unknown` reports `String`.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::String | FieldKind::Unknown { .. } => FieldType::String,
            FieldKind::Number => FieldType::Number,
            FieldKind::Boolean => FieldType::Boolean,
            FieldKind::Object { .. } => FieldType::Object,
            FieldKind::Array { .. } => FieldType::Array,
            FieldKind::Enum { .. } => FieldType::Enum,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub allow_null: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            allow_null: false,
        }
    }

    /// A field of the given type with an empty payload.
    pub fn of_type(name: impl Into<String>, ty: FieldType) -> Self {
        Self::new(name, FieldKind::empty(ty))
    }

    pub fn object(name: impl Into<String>, children: Vec<Field>) -> Self {
        Self::new(name, FieldKind::Object { children })
    }

    pub fn array(name: impl Into<String>, item_type: FieldType) -> Self {
        Self::new(
            name,
            FieldKind::Array {
                item_type,
                item_fields: Vec::new(),
            },
        )
    }

    pub fn array_of_objects(name: impl Into<String>, item_fields: Vec<Field>) -> Self {
        Self::new(
            name,
            FieldKind::Array {
                item_type: FieldType::Object,
                item_fields,
            },
        )
    }

    pub fn enumeration<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Enum {
                values: values.into_iter().collect(),
            },
        )
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_allow_null(mut self, allow_null: bool) -> Self {
        self.allow_null = allow_null;
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// The nested field list this node owns, if any.
    ///
    /// Objects own their `children`; arrays own `itemFields` only while their
    /// item type is `Object`.
    pub fn nested(&self) -> Option<&Vec<Field>> {
        match &self.kind {
            FieldKind::Object { children } => Some(children),
            FieldKind::Array {
                item_type: FieldType::Object,
                item_fields,
            } => Some(item_fields),
            _ => None,
        }
    }

    pub fn nested_mut(&mut self) -> Option<&mut Vec<Field>> {
        match &mut self.kind {
            FieldKind::Object { children } => Some(children),
            FieldKind::Array {
                item_type: FieldType::Object,
                item_fields,
            } => Some(item_fields),
            _ => None,
        }
    }

    /// Apply a single-attribute edit. Returns `false` when the edit does not
    /// apply to this field's kind or addresses a missing enum value.
    pub fn apply(&mut self, edit: FieldEdit) -> bool {
        match edit {
            FieldEdit::Rename(name) => self.name = name,
            FieldEdit::SetRequired(required) => self.required = required,
            FieldEdit::SetAllowNull(allow_null) => self.allow_null = allow_null,
            FieldEdit::SetType(ty) => {
                if matches!(self.kind, FieldKind::Unknown { .. }) || self.field_type() != ty {
                    self.kind = FieldKind::empty(ty);
                }
            }
            FieldEdit::SetItemType(ty) => {
                let FieldKind::Array {
                    item_type,
                    item_fields,
                } = &mut self.kind
                else {
                    return false;
                };
                if ty != FieldType::Object {
                    item_fields.clear();
                }
                *item_type = ty;
            }
            FieldEdit::AddEnumValue(value) => {
                let FieldKind::Enum { values } = &mut self.kind else {
                    return false;
                };
                values.insert(value);
            }
            FieldEdit::RemoveEnumValue(index) => {
                let FieldKind::Enum { values } = &mut self.kind else {
                    return false;
                };
                return values.remove(index).is_some();
            }
            FieldEdit::PasteEnumValues(text) => {
                let FieldKind::Enum { values } = &mut self.kind else {
                    return false;
                };
                values.paste(&text);
            }
        }
        true
    }
}

/// A mutation of one attribute of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Rename(String),
    /// Switching to a different type replaces the payload with an empty one.
    SetType(FieldType),
    SetRequired(bool),
    SetAllowNull(bool),
    /// Leaving `Object` drops the item fields.
    SetItemType(FieldType),
    AddEnumValue(String),
    RemoveEnumValue(usize),
    PasteEnumValues(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_type_rebuilds_payload() {
        let mut field = Field::object("address", vec![Field::of_type("city", FieldType::String)]);
        assert!(field.apply(FieldEdit::SetType(FieldType::Object)));
        assert_eq!(field.nested().map(Vec::len), Some(1));

        assert!(field.apply(FieldEdit::SetType(FieldType::Enum)));
        assert_eq!(
            field.kind,
            FieldKind::Enum {
                values: EnumValues::new()
            }
        );
    }

    #[test]
    fn test_set_type_replaces_unknown() {
        let mut field = Field::new(
            "count",
            FieldKind::Unknown {
                original: "integer".to_string(),
            },
        );
        assert_eq!(field.field_type(), FieldType::String);
        field.apply(FieldEdit::SetType(FieldType::String));
        assert_eq!(field.kind, FieldKind::String);
    }

    #[test]
    fn test_item_type_leaving_object_clears_item_fields() {
        let mut field =
            Field::array_of_objects("tags", vec![Field::of_type("label", FieldType::String)]);
        assert!(field.nested().is_some());
        assert!(field.apply(FieldEdit::SetItemType(FieldType::Number)));
        assert_eq!(
            field.kind,
            FieldKind::Array {
                item_type: FieldType::Number,
                item_fields: vec![],
            }
        );
        assert!(field.nested().is_none());
    }

    #[test]
    fn test_edits_on_wrong_kind_do_not_apply() {
        let mut field = Field::of_type("name", FieldType::String);
        assert!(!field.apply(FieldEdit::SetItemType(FieldType::Number)));
        assert!(!field.apply(FieldEdit::AddEnumValue("A".to_string())));
        assert!(!field.apply(FieldEdit::PasteEnumValues("A,B".to_string())));
        assert_eq!(field, Field::of_type("name", FieldType::String));
    }

    #[test]
    fn test_enum_edits() {
        let mut field = Field::enumeration("role", ["ADMIN"]);
        field.apply(FieldEdit::PasteEnumValues("USER\nADMIN\nGUEST".to_string()));
        field.apply(FieldEdit::AddEnumValue("USER".to_string()));
        assert!(!field.apply(FieldEdit::RemoveEnumValue(9)));
        assert!(field.apply(FieldEdit::RemoveEnumValue(2)));
        assert_eq!(field, Field::enumeration("role", ["ADMIN", "USER"]));
    }

    #[test]
    fn test_serde_shape() {
        let field = Field::array_of_objects(
            "items",
            vec![Field::of_type("sku", FieldType::String).with_required(true)],
        )
        .with_allow_null(true);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "items",
                "type": "array",
                "itemType": "object",
                "itemFields": [
                    {"name": "sku", "type": "string", "required": true, "allowNull": false}
                ],
                "required": false,
                "allowNull": true
            })
        );
        let back: Field = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn test_deserialize_defaults() {
        let field: Field =
            serde_json::from_str(r#"{"name": "role", "type": "enum", "enumValues": ["A", "A", "B"]}"#)
                .unwrap();
        assert_eq!(field, Field::enumeration("role", ["A", "B"]));
    }
}
