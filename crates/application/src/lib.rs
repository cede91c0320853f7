//! Satchel Application - Request editor orchestration
//!
//! This crate holds the workspace state controller that every edit path
//! routes through, the query-parameter reconciler, and the transport port
//! the composed request is eventually handed to.

pub mod editor;
pub mod error;
pub mod ports;

pub use editor::{EditorView, RequestEditor};
pub use error::{ApplicationError, ApplicationResult};
