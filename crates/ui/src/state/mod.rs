//! View state shared by the request form tables.

pub mod params_table;
pub mod variables_table;

use satchel_domain::ParamField;

/// Column visibility for a key/value table.
///
/// Backed by the "Show columns" dialog; the key column is always visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Whether the value column is rendered.
    pub show_value: bool,
    /// Whether the description column is rendered.
    pub show_description: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            show_value: true,
            show_description: true,
        }
    }
}

impl TableOptions {
    /// Flips the value column on or off.
    pub fn toggle_value_column(&mut self) {
        self.show_value = !self.show_value;
    }

    /// Flips the description column on or off.
    pub fn toggle_description_column(&mut self) {
        self.show_description = !self.show_description;
    }
}

/// The cell that should regain focus after a re-render.
///
/// Every edit replaces the structured list and re-renders the table, so
/// the renderer records which input the user was in and restores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusedCell {
    /// Row index; the trailing blank row sits at the list's length.
    pub row: usize,
    /// Which cell of the row.
    pub field: ParamField,
}
