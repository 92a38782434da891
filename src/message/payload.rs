//! Compiled webhook payload.
//!
//! These types mirror the JSON accepted by Slack's incoming-webhook API.
//! Unset values are omitted from the serialized output.

use serde::Serialize;

use super::MarkdownSection;

/// A title/value pair rendered as a table cell inside an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Bold heading above the value.
    pub title: String,
    /// Field content.
    pub value: String,
    /// Whether the field is narrow enough to sit beside another one.
    pub short: bool,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short,
        }
    }
}

/// The rich-content block of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub color: String,
    pub fallback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<MarkdownSection>,
}

impl Attachment {
    /// Creates an attachment with only the mandatory color and fallback text.
    #[must_use]
    pub fn new(color: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            fallback: fallback.into(),
            pretext: None,
            author_name: None,
            author_link: None,
            author_icon: None,
            title: None,
            title_link: None,
            text: None,
            fields: Vec::new(),
            thumb_url: None,
            image_url: None,
            footer: None,
            ts: None,
            footer_icon: None,
            mrkdwn_in: Vec::new(),
        }
    }
}

/// The complete JSON body posted to the webhook.
///
/// A plain message carries `text` (and optionally `mrkdwn`); a rich message
/// carries exactly one attachment and no top-level `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Payload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrkdwn: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Payload {
    /// Returns true if the payload carries a rich attachment.
    #[must_use]
    pub fn is_rich(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Serializes the payload to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the payload to JSON bytes for a request body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
