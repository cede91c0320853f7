//! Row model and view state for the path-variables table.

use satchel_domain::{PathVariable, PathVariables};

use super::TableOptions;

/// One renderable row of the path-variables table.
///
/// Unlike the parameters table there is no trailing blank row: variable
/// keys come from the URL template, never from typing into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariablesTableRow {
    /// The column header row.
    Header,
    /// A data row bound to the structured list.
    Entry {
        /// Index into the structured list.
        index: usize,
        /// Snapshot of the variable for rendering.
        variable: PathVariable,
    },
}

/// Flattens the variable list into the rows the table renders.
#[must_use]
pub fn variables_table_rows(variables: &PathVariables) -> Vec<VariablesTableRow> {
    let mut rows = Vec::with_capacity(variables.len() + 1);
    rows.push(VariablesTableRow::Header);
    for (index, variable) in variables.all().iter().enumerate() {
        rows.push(VariablesTableRow::Entry {
            index,
            variable: variable.clone(),
        });
    }
    rows
}

/// View state of the path-variables group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariablesTableState {
    /// Column visibility.
    pub options: TableOptions,
    /// Whether the options dialog is open.
    pub options_open: bool,
}

impl VariablesTableState {
    /// Creates the default view state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens or closes the column-options dialog.
    pub fn toggle_options_dialog(&mut self) {
        self.options_open = !self.options_open;
    }
}
