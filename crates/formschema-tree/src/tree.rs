//! Structural edits on a list of fields.

use thisisplural::Plural;

use crate::field::{Field, FieldEdit};
use crate::path::node_path;

/// Position of a node: the sibling index at each level from the root.
///
/// Every step after the first descends into the nested list of the node
/// reached so far (object children, or item fields of an array of objects).
/// The empty position addresses the root list when used as a parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Plural)]
pub struct TreePos(pub Vec<usize>);

impl TreePos {
    pub fn root() -> Self {
        TreePos(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The position of the `index`-th entry nested under this one.
    pub fn child(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(index);
        TreePos(steps)
    }
}

/// The field list being edited.
///
/// Operations never fail. A position that does not resolve, or that passes
/// through a node without a nested list, leaves the tree untouched and the
/// operation reports `false` (or `None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTree {
    fields: Vec<Field>,
}

impl FieldTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, pos: &TreePos) -> Option<&Field> {
        let (last, parent) = pos.0.split_last()?;
        self.siblings(parent)?.get(*last)
    }

    /// Append `field` at the end of the list nested under `parent`.
    pub fn push(&mut self, parent: &TreePos, field: Field) -> bool {
        match self.siblings_mut(&parent.0) {
            Some(list) => {
                list.push(field);
                true
            }
            None => false,
        }
    }

    /// Insert `field` before `index` in the list nested under `parent`.
    pub fn insert(&mut self, parent: &TreePos, index: usize, field: Field) -> bool {
        match self.siblings_mut(&parent.0) {
            Some(list) if index <= list.len() => {
                list.insert(index, field);
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, pos: &TreePos) -> Option<Field> {
        let (last, parent) = pos.0.split_last()?;
        let list = self.siblings_mut(parent)?;
        if *last < list.len() {
            Some(list.remove(*last))
        } else {
            None
        }
    }

    /// Apply `edit` to the node at `pos`, replacing the node by value.
    pub fn update(&mut self, pos: &TreePos, edit: FieldEdit) -> bool {
        let Some((last, parent)) = pos.0.split_last() else {
            return false;
        };
        let Some(slot) = self
            .siblings_mut(parent)
            .and_then(|list| list.get_mut(*last))
        else {
            return false;
        };
        let mut next = slot.clone();
        if !next.apply(edit) {
            return false;
        }
        *slot = next;
        true
    }

    /// Visit every node depth-first with its node path and position.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &TreePos, &Field),
    {
        walk_list(&self.fields, "", &mut TreePos::root(), &mut visit);
    }

    fn siblings(&self, parent: &[usize]) -> Option<&Vec<Field>> {
        let mut list = &self.fields;
        for &index in parent {
            list = list.get(index)?.nested()?;
        }
        Some(list)
    }

    fn siblings_mut(&mut self, parent: &[usize]) -> Option<&mut Vec<Field>> {
        let mut list = &mut self.fields;
        for &index in parent {
            list = list.get_mut(index)?.nested_mut()?;
        }
        Some(list)
    }
}

fn walk_list<F>(fields: &[Field], ancestor: &str, pos: &mut TreePos, visit: &mut F)
where
    F: FnMut(&str, &TreePos, &Field),
{
    for (index, field) in fields.iter().enumerate() {
        let path = node_path(ancestor, field, index);
        pos.0.push(index);
        visit(&path, pos, field);
        if let Some(nested) = field.nested() {
            walk_list(nested, &path, pos, visit);
        }
        pos.0.pop();
    }
}

impl From<Vec<Field>> for FieldTree {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl From<FieldTree> for Vec<Field> {
    fn from(tree: FieldTree) -> Self {
        tree.fields
    }
}
