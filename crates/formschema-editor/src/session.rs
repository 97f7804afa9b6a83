//! Bidirectional sync between the field tree and the document text.
//!
//! Each edit names the side it came from, and propagation only ever runs
//! from that side to the other:
//!
//! - a tree edit re-encodes the text unconditionally;
//! - a text edit replaces the tree only when the text parses to an object
//!   with non-empty `properties` or to a non-empty array. Syntax errors and
//!   anything else leave the tree as it was and the text exactly as typed.

use formschema_decl::{ImportError, import_declarations};
use formschema_json::{
    DocumentSyntaxError, SchemaDocument, decode_with_depth, encode, parse_text, to_text,
};
use formschema_tree::{Field, FieldEdit, FieldTree, TreePos};
use serde_json::Value;
use tracing::debug;

use crate::config::EditorConfig;
use crate::visibility::NodeVisibility;

/// The representation that was edited last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Tree,
    Text,
}

/// Outcome of a text edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSync {
    /// The text was decoded into a new tree.
    Applied,
    /// The text parsed but held nothing to decode (`{}`, `[]`, an object
    /// without properties or a scalar); the tree was kept.
    Guarded,
    /// The text is not well-formed; the tree was kept.
    Rejected(DocumentSyntaxError),
}

impl TextSync {
    pub fn is_applied(&self) -> bool {
        matches!(self, TextSync::Applied)
    }
}

/// One schema being edited.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    tree: FieldTree,
    text: String,
    last_edited: Side,
    syntax_error: Option<DocumentSyntaxError>,
    visibility: NodeVisibility,
}

impl EditorSession {
    /// An empty session. The text starts as the encoded empty document.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_fields(config, Vec::new())
    }

    pub fn with_fields(config: EditorConfig, fields: Vec<Field>) -> Self {
        let mut session = Self {
            config,
            tree: FieldTree::from(fields),
            text: String::new(),
            last_edited: Side::Tree,
            syntax_error: None,
            visibility: NodeVisibility::new(),
        };
        session.sync_text();
        session
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn tree(&self) -> &FieldTree {
        &self.tree
    }

    pub fn fields(&self) -> &[Field] {
        self.tree.fields()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_edited(&self) -> Side {
        self.last_edited
    }

    /// The error of the last rejected text edit, until the next successful
    /// parse or tree edit.
    pub fn syntax_error(&self) -> Option<&DocumentSyntaxError> {
        self.syntax_error.as_ref()
    }

    pub fn visibility(&self) -> &NodeVisibility {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut NodeVisibility {
        &mut self.visibility
    }

    /// The document to hand to validation or storage.
    pub fn document(&self) -> SchemaDocument {
        encode(self.tree.fields())
    }

    /// Load a different schema: replaces the tree, re-encodes the text and
    /// forgets all expand/collapse state.
    pub fn load(&mut self, doc: &Value) {
        self.tree = FieldTree::from(decode_with_depth(doc, self.config.max_depth));
        self.visibility.reset();
        self.sync_text();
    }

    pub fn push_field(&mut self, parent: &TreePos, field: Field) -> bool {
        self.edit_tree(|tree| tree.push(parent, field))
    }

    pub fn insert_field(&mut self, parent: &TreePos, index: usize, field: Field) -> bool {
        self.edit_tree(|tree| tree.insert(parent, index, field))
    }

    pub fn remove_field(&mut self, pos: &TreePos) -> Option<Field> {
        self.edit_tree(|tree| tree.remove(pos))
    }

    pub fn update_field(&mut self, pos: &TreePos, edit: FieldEdit) -> bool {
        self.edit_tree(|tree| tree.update(pos, edit))
    }

    pub fn replace_fields(&mut self, fields: Vec<Field>) {
        self.edit_tree(|tree| *tree = FieldTree::from(fields));
    }

    /// Replace the tree with imported declarations.
    ///
    /// On failure nothing changes and the error names the offending line.
    pub fn import(&mut self, declarations: &str) -> Result<(), ImportError> {
        let fields = import_declarations(declarations)?;
        self.replace_fields(fields);
        Ok(())
    }

    /// The user typed into the document text.
    pub fn edit_text(&mut self, text: impl Into<String>) -> TextSync {
        self.text = text.into();
        self.last_edited = Side::Text;

        let value = match parse_text(&self.text) {
            Ok(value) => value,
            Err(err) => {
                debug!(line = err.line, column = err.column, "document text rejected");
                self.syntax_error = Some(err.clone());
                return TextSync::Rejected(err);
            }
        };
        self.syntax_error = None;

        if !is_decodable(&value) {
            debug!("empty document text, keeping field tree");
            return TextSync::Guarded;
        }

        let fields = decode_with_depth(&value, self.config.max_depth);
        debug!(fields = fields.len(), "document text applied to field tree");
        self.tree = FieldTree::from(fields);
        TextSync::Applied
    }

    fn edit_tree<R>(&mut self, edit: impl FnOnce(&mut FieldTree) -> R) -> R {
        let result = edit(&mut self.tree);
        self.sync_text();
        result
    }

    fn sync_text(&mut self) {
        self.text = to_text(&self.document(), self.config.indent);
        self.last_edited = Side::Tree;
        self.syntax_error = None;
        debug!(bytes = self.text.len(), "field tree encoded to document text");
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

fn is_decodable(value: &Value) -> bool {
    match value {
        Value::Object(map) => map
            .get("properties")
            .and_then(Value::as_object)
            .is_some_and(|properties| !properties.is_empty()),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}
