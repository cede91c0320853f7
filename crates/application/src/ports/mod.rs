//! Ports to external collaborators.
//!
//! The editor core never performs I/O itself; outbound concerns are
//! expressed as traits the hosting application implements.

pub mod dispatcher;

pub use dispatcher::{DispatchError, DispatchResponse, RequestDispatcher};
