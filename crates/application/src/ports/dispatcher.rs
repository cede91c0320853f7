//! Request dispatcher port.

use std::future::Future;

use satchel_domain::HttpMethod;

/// Error type for dispatch operations.
///
/// The editor does not retry or interpret these; they are reported to the
/// caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The transport could not deliver the request.
    #[error("transport error: {0}")]
    Transport(String),

    /// The transport rejected the action URL.
    #[error("rejected action URL: {0}")]
    RejectedUrl(String),
}

/// Minimal view of a transport response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Status reason phrase, when the transport supplies one.
    pub status_text: String,
    /// Response body as text.
    pub body: String,
}

/// Port for submitting the composed request.
///
/// This trait abstracts the transport, keeping the editor independent of
/// any HTTP library. Implementations receive exactly the method and action
/// URL the editor holds at submission time.
pub trait RequestDispatcher: Send + Sync {
    /// Delivers the request and returns the transport's response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be delivered. The editor
    /// performs no retries.
    fn dispatch(
        &self,
        method: HttpMethod,
        action: &str,
    ) -> impl Future<Output = Result<DispatchResponse, DispatchError>> + Send;
}
