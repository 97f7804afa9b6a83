use crate::field::Field;

/// Separator between segments of a node path.
pub const PATH_SEPARATOR: char = '.';

/// Key of a tree position for expand/collapse state.
///
/// Joins `ancestor` with the field's name, or with `index` when the name is
/// empty. Duplicate or empty names never fail; they simply produce the same
/// key as their namesakes.
pub fn node_path(ancestor: &str, field: &Field, index: usize) -> String {
    let segment = if field.name.is_empty() {
        index.to_string()
    } else {
        field.name.clone()
    };
    if ancestor.is_empty() {
        segment
    } else {
        format!("{ancestor}{PATH_SEPARATOR}{segment}")
    }
}
