//! Error types for message configuration.

use thiserror::Error;

/// Error type for invalid message attributes.
///
/// Raised by the validating setters on [`Post`](super::Post). The draft is
/// left unchanged when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Channel override must start with `#` (channel) or `@` (direct message)
    /// and contain no whitespace.
    #[error("Invalid channel identifier '{0}'")]
    InvalidChannel(String),

    /// Footer timestamp must be a non-negative integer of digits only.
    #[error("Invalid timestamp value '{0}'")]
    InvalidTimestamp(String),
}
