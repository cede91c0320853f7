//! Row model and view state for the query-parameters table.

use satchel_domain::{QueryParam, QueryParams};

use super::{FocusedCell, TableOptions};

/// One renderable row of the query-parameters table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsTableRow {
    /// The column header row.
    Header,
    /// A data row bound to the structured list.
    Entry {
        /// Index into the structured list.
        index: usize,
        /// Snapshot of the parameter for rendering.
        param: QueryParam,
    },
    /// The perpetual blank row at the bottom; typing into it appends a
    /// new entry.
    TrailingBlank,
}

/// Flattens the parameter list into the rows the table renders.
///
/// An empty list still yields two rows (header plus trailing blank); each
/// parameter adds one row in between.
#[must_use]
pub fn params_table_rows(params: &QueryParams) -> Vec<ParamsTableRow> {
    let mut rows = Vec::with_capacity(params.len() + 2);
    rows.push(ParamsTableRow::Header);
    for (index, param) in params.all().iter().enumerate() {
        rows.push(ParamsTableRow::Entry {
            index,
            param: param.clone(),
        });
    }
    rows.push(ParamsTableRow::TrailingBlank);
    rows
}

/// View state of the query-parameters group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamsTableState {
    /// Column visibility.
    pub options: TableOptions,
    /// Whether the options dialog is open.
    pub options_open: bool,
    /// The cell to refocus after a re-render, if any.
    pub focused: Option<FocusedCell>,
}

impl ParamsTableState {
    /// Creates the default view state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens or closes the column-options dialog.
    pub fn toggle_options_dialog(&mut self) {
        self.options_open = !self.options_open;
    }

    /// Records the cell the user is typing in.
    pub fn focus(&mut self, cell: FocusedCell) {
        self.focused = Some(cell);
    }

    /// Takes the cell to refocus, clearing it for the next render.
    pub fn take_focus(&mut self) -> Option<FocusedCell> {
        self.focused.take()
    }
}
