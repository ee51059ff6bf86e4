//! Errors raised while talking to the remote API.

use thiserror::Error;

/// Errors returned by [`super::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the response not read.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("API error ({status}) from {url}: {body}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Returns the HTTP status when the API answered with one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Client(_) | Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}
