//! Webhook address validation.
//!
//! Slack incoming webhooks live under a single host with a fixed
//! `/services/<team>/<channel>/<token>` path layout. [`WebhookAddress`]
//! checks that shape once and keeps the routing parts for the transport.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

/// Host and path shape of a Slack incoming-webhook URL.
static WEBHOOK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(hooks\.slack\.com)(/services/[A-Z0-9]{9}/[A-Z0-9]{9,}/[A-Za-z0-9/]{24})$")
        .expect("webhook URL pattern is valid")
});

/// Error returned when a string is not a valid webhook address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The address does not match the incoming-webhook URL shape.
    #[error("Invalid Slack webhook URL '{0}'")]
    InvalidAddress(String),
}

/// A validated Slack incoming-webhook address.
///
/// Holds the host and path extracted at validation time, plus the parsed
/// [`Url`] handed to the HTTP transport. Immutable once constructed.
///
/// # Example
///
/// ```
/// use slack_post::WebhookAddress;
///
/// let address = WebhookAddress::parse(
///     "https://hooks.slack.com/services/ABCDEF012/012345ABC/fjdke456HRekdftFOGRPh21s",
/// )
/// .unwrap();
///
/// assert_eq!(address.host(), "hooks.slack.com");
/// assert_eq!(address.path(), "/services/ABCDEF012/012345ABC/fjdke456HRekdftFOGRPh21s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookAddress {
    host: String,
    path: String,
    url: Url,
}

impl WebhookAddress {
    /// Validates `address` and splits it into host and path.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidAddress`] if the address does not
    /// match the incoming-webhook URL shape.
    pub fn parse(address: &str) -> Result<Self, AddressError> {
        let invalid = || AddressError::InvalidAddress(address.to_string());

        let captures = WEBHOOK_URL.captures(address).ok_or_else(invalid)?;
        let (Some(host), Some(path)) = (captures.get(1), captures.get(2)) else {
            return Err(invalid());
        };

        let url = Url::parse(address).map_err(|_| invalid())?;

        Ok(Self {
            host: host.as_str().to_string(),
            path: path.as_str().to_string(),
            url,
        })
    }

    /// Returns the webhook host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the full request path, including the `/services` prefix.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the address as a URL for the HTTP transport.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl FromStr for WebhookAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// The token segment is a credential; keep it out of logs.
impl fmt::Display for WebhookAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "", "services", team, channel
        let prefix = self.path.split('/').take(4).collect::<Vec<_>>().join("/");
        write!(f, "https://{}{prefix}/***", self.host)
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
