//! Satchel UI - Presentation state
//!
//! View configuration for the request form tables: column visibility,
//! focus tracking, and the row models a renderer iterates over. This is
//! deliberately separate from the editor core — nothing here participates
//! in reconciliation or any other request logic.

pub mod state;

pub use state::params_table::{params_table_rows, ParamsTableRow, ParamsTableState};
pub use state::variables_table::{variables_table_rows, VariablesTableRow, VariablesTableState};
pub use state::{FocusedCell, TableOptions};
