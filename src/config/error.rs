//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::address::AddressError;
use crate::message::MessageError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// The webhook URL is not a Slack incoming-webhook address.
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    /// A message attribute failed validation.
    #[error(transparent)]
    InvalidMessage(#[from] MessageError),

    /// A `--field` value is not in `Title=Value` form.
    #[error("Invalid field format '{value}': expected 'Title=Value'")]
    InvalidField {
        /// The invalid field string
        value: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The webhook URL field.
    pub const URL: &str = "url";
    /// The message text field.
    pub const TEXT: &str = "text";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
