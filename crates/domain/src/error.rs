//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during parsing or validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    ///
    /// Callers at the edit boundary treat this as "no parameters" rather
    /// than an error state: an incomplete URL while typing is expected.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
