//! Query parameter types

use serde::{Deserialize, Serialize};

/// A query parameter key-value pair.
///
/// Supports enable/disable without deletion: a disabled parameter stays
/// visible in the table and bulk text but is excluded from the synthesized
/// request URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
    /// Description for documentation purposes
    #[serde(default)]
    pub description: String,
    /// Whether this parameter is included in the synthesized URL
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl QueryParam {
    /// Creates a new enabled query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: String::new(),
            enabled: true,
        }
    }

    /// Creates a disabled query parameter.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: String::new(),
            enabled: false,
        }
    }

    /// Adds a description to this parameter.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if both key and value are empty strings.
    ///
    /// Blank rows are removed on blur; a row with only one empty field is
    /// one the user may still be typing into, so it does not count.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }
}

/// The editable cells of a query parameter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    /// The key cell.
    Key,
    /// The value cell.
    Value,
    /// The description cell.
    Description,
}

/// A collection of query parameters.
///
/// The structured list is the single source of truth for the request
/// editor; the action URL and bulk text are views derived from it. All
/// edit operations are expressed as transforms that return a new list so
/// a renderer snapshot can never alias the authoritative copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    items: Vec<QueryParam>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a query parameter to the collection.
    pub fn add(&mut self, param: QueryParam) {
        self.items.push(param);
    }

    /// Returns an iterator over enabled parameters.
    pub fn enabled(&self) -> impl Iterator<Item = &QueryParam> {
        self.items.iter().filter(|p| p.enabled)
    }

    /// Returns all parameters (enabled and disabled).
    #[must_use]
    pub fn all(&self) -> &[QueryParam] {
        &self.items
    }

    /// Returns the parameter at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QueryParam> {
        self.items.get(index)
    }

    /// Returns the number of parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a copy with one cell of the row at `index` replaced.
    ///
    /// An out-of-range index returns the list unchanged.
    #[must_use]
    pub fn with_field(&self, index: usize, field: ParamField, text: &str) -> Self {
        let mut items = self.items.clone();
        if let Some(param) = items.get_mut(index) {
            match field {
                ParamField::Key => param.key = text.to_string(),
                ParamField::Value => param.value = text.to_string(),
                ParamField::Description => param.description = text.to_string(),
            }
        }
        Self { items }
    }

    /// Returns a copy with a fresh enabled row appended and one cell set.
    ///
    /// This backs the perpetual trailing blank row of the table: typing
    /// into it creates a real entry.
    #[must_use]
    pub fn with_appended(&self, field: ParamField, text: &str) -> Self {
        let mut items = self.items.clone();
        let mut param = QueryParam::new("", "");
        match field {
            ParamField::Key => param.key = text.to_string(),
            ParamField::Value => param.value = text.to_string(),
            ParamField::Description => param.description = text.to_string(),
        }
        items.push(param);
        Self { items }
    }

    /// Returns a copy with the enabled flag at `index` set.
    ///
    /// An out-of-range index returns the list unchanged.
    #[must_use]
    pub fn with_enabled(&self, index: usize, enabled: bool) -> Self {
        let mut items = self.items.clone();
        if let Some(param) = items.get_mut(index) {
            param.enabled = enabled;
        }
        Self { items }
    }

    /// Returns a copy with the rows at `index` and `target` swapped.
    ///
    /// If either position is out of range the list is returned unchanged.
    #[must_use]
    pub fn with_swapped(&self, index: usize, target: usize) -> Self {
        let mut items = self.items.clone();
        if index < items.len() && target < items.len() {
            items.swap(index, target);
        }
        Self { items }
    }

    /// Returns a copy with the row at `index` removed.
    ///
    /// An out-of-range index returns the list unchanged.
    #[must_use]
    pub fn without(&self, index: usize) -> Self {
        let mut items = self.items.clone();
        if index < items.len() {
            items.remove(index);
        }
        Self { items }
    }

    /// Returns a copy with the row at `index` removed only if both its key
    /// and value are empty strings.
    #[must_use]
    pub fn without_blank(&self, index: usize) -> Self {
        match self.items.get(index) {
            Some(param) if param.is_blank() => self.without(index),
            _ => self.clone(),
        }
    }
}

impl FromIterator<QueryParam> for QueryParams {
    fn from_iter<T: IntoIterator<Item = QueryParam>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
