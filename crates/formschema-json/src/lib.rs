//! Schema document encoding for formschema
//!
//! This crate converts a field tree to a JSON Schema-like document and back.
//! [`encode`] is total; [`decode`] is a lenient best-effort inverse that never
//! fails. [`to_text`] and [`parse_text`] move the document in and out of its
//! editable text form.

pub mod decode;
pub mod encode;
pub mod schema;
pub mod text;

pub use decode::{DEFAULT_MAX_DEPTH, decode, decode_with_depth};
pub use encode::encode;
pub use schema::{
    ArraySchema, EnumSchema, JsonType, ObjectSchema, PropertySchema, ScalarSchema,
    SchemaDocument, TypeSpec,
};
pub use text::{DocumentSyntaxError, parse_text, to_text};
