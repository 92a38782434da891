//! Validated configuration after merging CLI and TOML sources.
//!
//! Merging produces a ready-to-send [`Post`]; every address and message
//! validation runs during construction.

use std::fmt;
use std::path::Path;

use crate::address::WebhookAddress;
use crate::message::{MarkdownSection, Post};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{MessageSection, TomlConfig};

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// The message to send, bound to its webhook address
    pub post: Post,

    /// Print the payload instead of sending it
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ webhook: {}, mode: {}, dry_run: {} }}",
            self.post.address(),
            if self.post.is_rich() { "rich" } else { "plain" },
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`url`, `text`)
    /// - The URL is not a Slack incoming-webhook address
    /// - The channel or footer timestamp is invalid
    /// - A `--field` value is not in `Title=Value` form
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let address = Self::resolve_address(cli, toml)?;

        let text = cli
            .text
            .clone()
            .ok_or_else(|| ConfigError::missing(field::TEXT, "Use --text to set the message"))?;

        let mut post = Post::with_address(address, text);
        let message_defaults = toml.map(|t| &t.message);

        Self::apply_envelope(&mut post, cli, message_defaults)?;
        Self::apply_attachment(&mut post, cli)?;

        Ok(Self {
            post,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_address(cli: &Cli, toml: Option<&TomlConfig>) -> Result<WebhookAddress, ConfigError> {
        // CLI takes precedence
        let url = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        Ok(WebhookAddress::parse(url)?)
    }

    fn apply_envelope(
        post: &mut Post,
        cli: &Cli,
        toml: Option<&MessageSection>,
    ) -> Result<(), ConfigError> {
        let fallback = MessageSection::default();
        let toml = toml.unwrap_or(&fallback);

        if let Some(username) = cli.username.as_deref().or(toml.username.as_deref()) {
            post.set_username(username);
        }
        if let Some(channel) = cli.channel.as_deref().or(toml.channel.as_deref()) {
            post.set_channel(channel)?;
        }
        if let Some(emoji) = cli.icon_emoji.as_deref().or(toml.icon_emoji.as_deref()) {
            post.set_icon_emoji(emoji);
        }
        if let Some(url) = cli.icon_url.as_deref().or(toml.icon_url.as_deref()) {
            post.set_icon_url(url);
        }
        if let Some(color) = cli.color.as_deref().or(toml.color.as_deref()) {
            post.set_color(color);
        }

        // Flags only enable
        if cli.unfurl_links || toml.unfurl_links {
            post.enable_unfurl_links();
        }
        if cli.no_markdown || toml.disable_markdown {
            post.disable_markdown();
        }

        Ok(())
    }

    fn apply_attachment(post: &mut Post, cli: &Cli) -> Result<(), ConfigError> {
        if let Some(ref pretext) = cli.pretext {
            post.set_pretext(pretext, cli.markdown_requested(MarkdownSection::Pretext));
        }
        if let Some(ref author) = cli.author {
            post.set_author(
                author,
                cli.author_link.as_deref(),
                cli.author_icon.as_deref(),
            );
        }
        if let Some(ref title) = cli.title {
            post.set_title(title, cli.title_link.as_deref());
        }
        if let Some(ref text) = cli.rich_text {
            post.set_rich_text(text, cli.markdown_requested(MarkdownSection::Text));
        }

        for field in &cli.ordered_fields {
            let (title, content) = parse_field(&field.value)?;
            post.add_field(title, content, field.short);
        }
        if cli.markdown_requested(MarkdownSection::Fields) {
            post.enable_field_markdown();
        }

        if let Some(ref thumbnail) = cli.thumbnail {
            post.set_thumbnail(thumbnail);
        }
        if let Some(ref image) = cli.image {
            post.set_image(image);
        }
        if let Some(ref footer) = cli.footer {
            post.set_footer(
                footer,
                cli.footer_ts.as_deref(),
                cli.footer_icon.as_deref(),
            )?;
        }

        Ok(())
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_field(s: &str) -> Result<(&str, &str), ConfigError> {
    s.split_once(defaults::FIELD_SEPARATOR)
        .map(|(title, value)| (title.trim(), value.trim()))
        .filter(|(title, _)| !title.is_empty())
        .ok_or_else(|| ConfigError::InvalidField {
            value: s.to_string(),
        })
}
