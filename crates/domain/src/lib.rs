//! Satchel Domain - Core request-composition types
//!
//! This crate defines the domain model for the Satchel API client:
//! the structured query-parameter and path-variable lists, the bulk-text
//! codec, and the request action synthesizer. All types here are pure
//! Rust with no I/O dependencies.

pub mod error;
pub mod request;

pub use error::{DomainError, DomainResult};
pub use request::{
    HttpMethod, ParamField, PathVariable, PathVariables, QueryParam, QueryParams, VariableField,
};
