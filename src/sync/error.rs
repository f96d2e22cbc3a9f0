//! Remote sync error types.

use thiserror::Error;

/// Errors that can occur when reporting progress to the backend.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The backend returned an error response.
    #[error("backend error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The backend answered with a body we could not parse.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The adapter was configured to refuse requests.
    #[error("sync unavailable: {0}")]
    Unavailable(String),
}
