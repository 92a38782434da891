//! The message builder.

use std::sync::LazyLock;

use regex::Regex;

use crate::address::{AddressError, WebhookAddress};
use crate::webhook::{DeliveryError, WebhookSender};

use super::{Attachment, Field, MarkdownSection, MarkdownSections, MessageError, Payload, color};

/// `#channel` or `@user`, no whitespace.
static CHANNEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[#@]\S+$").expect("channel pattern is valid"));

static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("timestamp pattern is valid"));

/// A message draft bound to a validated webhook address.
///
/// Setters mutate the draft and return `&mut Self`, so calls chain:
///
/// ```
/// use slack_post::{Post, color};
///
/// let mut post = Post::new(
///     "https://hooks.slack.com/services/ABCDEF012/012345ABC/fjdke456HRekdftFOGRPh21s",
///     "Deploy finished",
/// )?;
///
/// post.set_username("deploy-bot")
///     .set_channel("#ops")?
///     .set_color(color::GOOD)
///     .set_title("Release 1.4.2", Some("https://example.com/releases/1.4.2"))
///     .add_field("Environment", "production", true);
///
/// let payload = post.build_payload();
/// assert_eq!(payload.attachments.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// A draft with nothing beyond its base text compiles to a plain message.
/// Setting any of pretext, author, title, rich text, fields, thumbnail,
/// image, or footer switches it to a single-attachment rich message, with
/// the base text moved to the attachment's fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    address: WebhookAddress,
    text: String,

    username: Option<String>,
    channel: Option<String>,
    icon_emoji: Option<String>,
    icon_url: Option<String>,
    unfurl_links: bool,
    disable_markdown: bool,

    color: Option<String>,
    pretext: Option<String>,
    author_name: Option<String>,
    author_link: Option<String>,
    author_icon: Option<String>,
    title: Option<String>,
    title_link: Option<String>,
    rich_text: Option<String>,
    fields: Vec<Field>,
    thumbnail_url: Option<String>,
    image_url: Option<String>,
    footer: Option<String>,
    footer_timestamp: Option<u64>,
    footer_icon: Option<String>,
    markdown_in: MarkdownSections,
}

impl Post {
    /// Validates `address` and starts a draft with `text` as its base text.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidAddress`] if `address` is not an
    /// incoming-webhook URL.
    pub fn new(address: &str, text: impl Into<String>) -> Result<Self, AddressError> {
        Ok(Self::with_address(WebhookAddress::parse(address)?, text))
    }

    /// Starts a draft for an already validated address.
    #[must_use]
    pub fn with_address(address: WebhookAddress, text: impl Into<String>) -> Self {
        Self {
            address,
            text: text.into(),
            username: None,
            channel: None,
            icon_emoji: None,
            icon_url: None,
            unfurl_links: false,
            disable_markdown: false,
            color: None,
            pretext: None,
            author_name: None,
            author_link: None,
            author_icon: None,
            title: None,
            title_link: None,
            rich_text: None,
            fields: Vec::new(),
            thumbnail_url: None,
            image_url: None,
            footer: None,
            footer_timestamp: None,
            footer_icon: None,
            markdown_in: MarkdownSections::new(),
        }
    }

    /// Returns the webhook address this draft will be sent to.
    #[must_use]
    pub const fn address(&self) -> &WebhookAddress {
        &self.address
    }

    /// Returns the base text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Overrides the bot's display name.
    pub fn set_username(&mut self, name: impl Into<String>) -> &mut Self {
        self.username = Some(name.into());
        self
    }

    /// Overrides the destination channel (`#channel`) or user (`@user`).
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidChannel`] if `channel` does not start
    /// with `#` or `@`, or contains whitespace.
    pub fn set_channel(&mut self, channel: impl Into<String>) -> Result<&mut Self, MessageError> {
        let channel = channel.into();
        if !CHANNEL.is_match(&channel) {
            return Err(MessageError::InvalidChannel(channel));
        }

        self.channel = Some(channel);
        Ok(self)
    }

    /// Sets the icon to an emoji, given without the surrounding colons.
    ///
    /// Takes precedence over [`set_icon_url`](Self::set_icon_url).
    pub fn set_icon_emoji(&mut self, name: impl Into<String>) -> &mut Self {
        self.icon_emoji = Some(name.into());
        self
    }

    /// Sets the icon to a public image URL.
    pub fn set_icon_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Asks Slack to unfurl links found in the message.
    pub const fn enable_unfurl_links(&mut self) -> &mut Self {
        self.unfurl_links = true;
        self
    }

    /// Disables markdown rendering of a plain message. No effect on rich messages.
    pub const fn disable_markdown(&mut self) -> &mut Self {
        self.disable_markdown = true;
        self
    }

    /// Sets the attachment side bar color: one of [`color`] or a hex string.
    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    /// Sets text shown above the attachment.
    pub fn set_pretext(&mut self, text: impl Into<String>, enable_markdown: bool) -> &mut Self {
        self.pretext = Some(text.into());
        if enable_markdown {
            self.markdown_in.enable(MarkdownSection::Pretext);
        }
        self
    }

    /// Sets the author line, with an optional link and icon.
    pub fn set_author(
        &mut self,
        name: impl Into<String>,
        link: Option<&str>,
        icon_url: Option<&str>,
    ) -> &mut Self {
        self.author_name = Some(name.into());
        self.author_link = link.map(str::to_string);
        self.author_icon = icon_url.map(str::to_string);
        self
    }

    /// Sets the attachment title, with an optional link.
    pub fn set_title(&mut self, title: impl Into<String>, link: Option<&str>) -> &mut Self {
        self.title = Some(title.into());
        self.title_link = link.map(str::to_string);
        self
    }

    /// Sets the attachment body text.
    pub fn set_rich_text(&mut self, text: impl Into<String>, enable_markdown: bool) -> &mut Self {
        self.rich_text = Some(text.into());
        if enable_markdown {
            self.markdown_in.enable(MarkdownSection::Text);
        }
        self
    }

    /// Appends a field. Fields keep insertion order and are never deduplicated.
    pub fn add_field(
        &mut self,
        title: impl Into<String>,
        value: impl Into<String>,
        short: bool,
    ) -> &mut Self {
        self.fields.push(Field::new(title, value, short));
        self
    }

    /// Renders field values as markdown.
    pub fn enable_field_markdown(&mut self) -> &mut Self {
        self.markdown_in.enable(MarkdownSection::Fields);
        self
    }

    /// Sets a small thumbnail on the right of the attachment.
    ///
    /// Takes precedence over [`set_image`](Self::set_image).
    pub fn set_thumbnail(&mut self, url: impl Into<String>) -> &mut Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Sets a full-width image inside the attachment.
    pub fn set_image(&mut self, url: impl Into<String>) -> &mut Self {
        self.image_url = Some(url.into());
        self
    }

    /// Sets the footer line, with an optional Unix timestamp and icon.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidTimestamp`] if `timestamp` is not made
    /// of digits only or does not fit in a `u64`.
    pub fn set_footer(
        &mut self,
        text: impl Into<String>,
        timestamp: Option<&str>,
        icon_url: Option<&str>,
    ) -> Result<&mut Self, MessageError> {
        let timestamp = timestamp.map(parse_timestamp).transpose()?;

        self.footer = Some(text.into());
        self.footer_timestamp = timestamp;
        self.footer_icon = icon_url.map(str::to_string);
        Ok(self)
    }

    /// Returns true if the draft compiles to a rich (attachment) message.
    #[must_use]
    pub fn is_rich(&self) -> bool {
        self.pretext.is_some()
            || self.author_name.is_some()
            || self.title.is_some()
            || self.rich_text.is_some()
            || !self.fields.is_empty()
            || self.thumbnail_url.is_some()
            || self.image_url.is_some()
            || self.footer.is_some()
    }

    /// Compiles the current draft into the webhook payload.
    ///
    /// Pure and repeatable: an unchanged draft always yields an equal payload.
    #[must_use]
    pub fn build_payload(&self) -> Payload {
        let mut payload = Payload {
            username: self.username.clone(),
            channel: self.channel.clone(),
            ..Payload::default()
        };

        if let Some(emoji) = &self.icon_emoji {
            payload.icon_emoji = Some(format!(":{emoji}:"));
        } else {
            payload.icon_url.clone_from(&self.icon_url);
        }

        if self.unfurl_links {
            payload.unfurl_links = Some(true);
        }

        if self.is_rich() {
            payload.attachments = vec![self.build_attachment()];
        } else {
            payload.text = Some(self.text.clone());
            if self.disable_markdown {
                payload.mrkdwn = Some(false);
            }
        }

        payload
    }

    fn build_attachment(&self) -> Attachment {
        let color = self.color.as_deref().unwrap_or(color::GOOD);
        let mut attachment = Attachment::new(color, self.text.clone());

        attachment.pretext.clone_from(&self.pretext);

        if let Some(name) = &self.author_name {
            attachment.author_name = Some(name.clone());
            attachment.author_link.clone_from(&self.author_link);
            attachment.author_icon.clone_from(&self.author_icon);
        }

        if let Some(title) = &self.title {
            attachment.title = Some(title.clone());
            attachment.title_link.clone_from(&self.title_link);
        }

        attachment.text.clone_from(&self.rich_text);
        attachment.fields.clone_from(&self.fields);

        if let Some(thumbnail) = &self.thumbnail_url {
            attachment.thumb_url = Some(thumbnail.clone());
        } else {
            attachment.image_url.clone_from(&self.image_url);
        }

        if let Some(footer) = &self.footer {
            attachment.footer = Some(footer.clone());
            attachment.ts = self.footer_timestamp;
            attachment.footer_icon.clone_from(&self.footer_icon);
        }

        attachment.mrkdwn_in = self.markdown_in.to_vec();
        attachment
    }

    /// Compiles the draft and serializes it to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.build_payload().to_json()
    }

    /// Compiles the draft and posts it to the webhook through `sender`.
    ///
    /// Exactly one request is made. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] if the payload cannot be serialized, the
    /// transport fails, or the webhook answers with anything but `200 OK`.
    pub async fn send<W: WebhookSender>(&self, sender: &W) -> Result<(), DeliveryError> {
        let payload = self.build_payload();
        tracing::debug!(
            address = %self.address,
            rich = payload.is_rich(),
            "Sending message to Slack webhook"
        );

        match sender.send(&self.address, &payload).await {
            Ok(()) => {
                tracing::debug!("Slack webhook accepted message");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Slack webhook delivery failed: {e}");
                Err(e)
            }
        }
    }
}

fn parse_timestamp(value: &str) -> Result<u64, MessageError> {
    if !TIMESTAMP.is_match(value) {
        return Err(MessageError::InvalidTimestamp(value.to_string()));
    }

    value
        .parse()
        .map_err(|_| MessageError::InvalidTimestamp(value.to_string()))
}

/// Validates `address` and starts a draft. Shorthand for [`Post::new`].
///
/// # Errors
///
/// Returns [`AddressError::InvalidAddress`] if `address` is not an
/// incoming-webhook URL.
pub fn post(address: &str, text: impl Into<String>) -> Result<Post, AddressError> {
    Post::new(address, text)
}
