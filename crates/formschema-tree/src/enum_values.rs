use serde::{Deserialize, Serialize};

/// Ordered set of enum literals.
///
/// Values keep the order in which they were first inserted and duplicates are
/// dropped on insertion, whether they come from a single edit or a bulk paste.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct EnumValues(Vec<String>);

impl EnumValues {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a value, returning `false` if it was already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.0.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    /// Remove the value at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Bulk paste-in: splits on newlines and commas, trims each entry and
    /// inserts the non-empty ones in order. Returns how many were new.
    pub fn paste(&mut self, text: &str) -> usize {
        text.split(['\n', ','])
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter(|entry| self.insert(*entry))
            .count()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> Extend<S> for EnumValues {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for EnumValues {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut values = EnumValues::new();
        values.extend(iter);
        values
    }
}

impl From<Vec<String>> for EnumValues {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<EnumValues> for Vec<String> {
    fn from(values: EnumValues) -> Self {
        values.0
    }
}
