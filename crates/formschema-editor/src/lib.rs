//! Editing session for formschema
//!
//! An [`EditorSession`] owns one field tree and the document text encoded
//! from it. Edits on either side propagate to the other, except that text
//! which does not parse, or parses to an empty document, never replaces the
//! tree.

pub mod config;
pub mod session;
pub mod visibility;

pub use config::{CONFIG_FILENAME, ConfigError, EditorConfig};
pub use session::{EditorSession, Side, TextSync};
pub use visibility::NodeVisibility;
