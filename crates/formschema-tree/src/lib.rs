//! Editable field tree for formschema.
//!
//! A schema is edited as an ordered list of [`Field`]s. Object fields nest
//! their `children`, array fields of objects nest their `itemFields`. The
//! tree is a plain recursive value: every edit goes through [`FieldTree`],
//! which addresses nodes by [`TreePos`] and treats out-of-range positions as
//! no-ops.
//!
//! [`node_path`] derives the string keys used for expand/collapse state. The
//! key is recomputed on every traversal and never stored on a field.

pub mod enum_values;
pub mod field;
pub mod path;
pub mod tree;

pub use enum_values::EnumValues;
pub use field::{Field, FieldEdit, FieldKind, FieldType};
pub use path::node_path;
pub use tree::{FieldTree, TreePos};
