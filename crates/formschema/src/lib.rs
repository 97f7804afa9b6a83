//! Schema modeling and bidirectional transformation.
//!
//! A schema is authored as a tree of typed [`Field`]s and exchanged as a
//! JSON Schema-like [`SchemaDocument`]. The four entry points are:
//!
//! - [`encode`]: field tree to schema document, total;
//! - [`decode`]: schema document to field tree, lenient and total;
//! - [`import_declarations`]: `name: type;` declaration text to field tree,
//!   failing on the first unreadable line;
//! - [`node_path`]: the key under which a node's expand/collapse state is kept.
//!
//! [`EditorSession`] ties them together for interactive editing.

pub mod report;

pub use formschema_decl::{ImportError, ImportErrorKind, import_declarations};
pub use formschema_editor::{
    CONFIG_FILENAME, ConfigError, EditorConfig, EditorSession, NodeVisibility, Side, TextSync,
};
pub use formschema_json::{
    DEFAULT_MAX_DEPTH, DocumentSyntaxError, SchemaDocument, decode, decode_with_depth, encode,
    parse_text, to_text,
};
pub use formschema_tree::{
    EnumValues, Field, FieldEdit, FieldKind, FieldTree, FieldType, TreePos, node_path,
};

pub use formschema_decl as decl;
pub use formschema_editor as editor;
pub use formschema_json as json;
pub use formschema_tree as tree;

pub use serde_json::Value;
