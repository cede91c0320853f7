//! Application error types

use thiserror::Error;

use satchel_domain::DomainError;

use crate::ports::DispatchError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Dispatching the composed request failed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
