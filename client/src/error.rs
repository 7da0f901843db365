//! Error types for the paperdesk API client

use thiserror::Error;

/// Errors that can occur when talking to the paperdesk API
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("Response decoding failed: {0}")]
    DecodeFailed(String),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// API accepted the request but reported an application error
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Download could not be streamed to disk
    #[error("Download failed: {0}")]
    DownloadFailed(String),
}
