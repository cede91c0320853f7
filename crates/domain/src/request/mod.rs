//! Request composition types and pure transformations.

pub mod action;
pub mod codec;
pub mod method;
pub mod path_variable;
pub mod query;

pub use method::HttpMethod;
pub use path_variable::{PathVariable, PathVariables, VariableField};
pub use query::{ParamField, QueryParam, QueryParams};
