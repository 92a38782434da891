//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the transport level, before any
/// response status is available.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS, refused connections, TLS and request-building failures.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,
}

/// Error type for posting a message to a webhook.
///
/// Returned only from a send; a send either fully succeeds or fails
/// with one of these.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The payload could not be serialized to JSON.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The transport failed before a response was received.
    #[error("Error posting to Slack API: {0}")]
    Http(#[from] HttpError),

    /// The webhook answered with a status other than `200 OK`.
    #[error("Error posting to Slack API: HTTP {status}")]
    UnexpectedStatus {
        /// The HTTP status code returned
        status: http::StatusCode,
        /// Response body, if valid UTF-8 and non-empty
        body: Option<String>,
    },
}

impl DeliveryError {
    /// Returns the HTTP status for [`DeliveryError::UnexpectedStatus`].
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
