//! Document text: pretty-printing and parsing.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::schema::SchemaDocument;

/// The document text is not well-formed JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DocumentSyntaxError {
    /// 1-indexed line of the failure.
    pub line: usize,
    /// 1-indexed column of the failure.
    pub column: usize,
    pub message: String,
}

impl From<serde_json::Error> for DocumentSyntaxError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Parse document text into a JSON value.
pub fn parse_text(text: &str) -> Result<Value, DocumentSyntaxError> {
    Ok(serde_json::from_str(text)?)
}

/// Pretty-print a document with `indent` spaces per level.
pub fn to_text(doc: &SchemaDocument, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    if let Err(err) = doc.serialize(&mut serializer) {
        // Writing string-keyed data into memory has no failure path left.
        tracing::error!(%err, "failed to serialize schema document");
    }
    String::from_utf8_lossy(&out).into_owned()
}
