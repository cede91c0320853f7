//! Path variable types

use serde::{Deserialize, Serialize};

/// A path variable extracted from the URL path template.
///
/// Keys are derived from marker-prefixed path segments (e.g. `:id`) and are
/// read-only once extracted; only the value and description are editable.
/// Path variables are documentation-only: they are not substituted into the
/// URL when the request is synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathVariable {
    /// The variable name, without the marker prefix
    pub key: String,
    /// The user-supplied value
    #[serde(default)]
    pub value: String,
    /// Description for documentation purposes
    #[serde(default)]
    pub description: String,
}

impl PathVariable {
    /// Creates a new path variable with empty value and description.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            description: String::new(),
        }
    }
}

/// The user-editable cells of a path variable row.
///
/// There is deliberately no `Key` variant: keys come from the URL template
/// and never mutate through the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableField {
    /// The value cell.
    Value,
    /// The description cell.
    Description,
}

/// A collection of path variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathVariables {
    items: Vec<PathVariable>,
}

impl PathVariables {
    /// Creates an empty path variable collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a path variable to the collection.
    pub fn add(&mut self, variable: PathVariable) {
        self.items.push(variable);
    }

    /// Returns all path variables.
    #[must_use]
    pub fn all(&self) -> &[PathVariable] {
        &self.items
    }

    /// Returns the variable at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PathVariable> {
        self.items.get(index)
    }

    /// Returns the number of variables.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no variables.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a copy with one editable cell of the row at `index` replaced.
    ///
    /// An out-of-range index returns the list unchanged.
    #[must_use]
    pub fn with_field(&self, index: usize, field: VariableField, text: &str) -> Self {
        let mut items = self.items.clone();
        if let Some(variable) = items.get_mut(index) {
            match field {
                VariableField::Value => variable.value = text.to_string(),
                VariableField::Description => variable.description = text.to_string(),
            }
        }
        Self { items }
    }
}

impl FromIterator<PathVariable> for PathVariables {
    fn from_iter<T: IntoIterator<Item = PathVariable>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
