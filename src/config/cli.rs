//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};

use crate::message::MarkdownSection;

use super::defaults;

/// slack-post: send a message to a Slack incoming webhook
///
/// Plain text is sent as-is. Any attachment option (pretext, author,
/// title, rich text, fields, images, footer) turns the message into a
/// rich attachment with the text as its fallback.
#[derive(Debug, Parser)]
#[command(name = "slack-post")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Slack incoming-webhook URL
    #[arg(long)]
    pub url: Option<String>,

    /// Message text (fallback text for rich messages)
    #[arg(long, short)]
    pub text: Option<String>,

    /// Override the bot username
    #[arg(long)]
    pub username: Option<String>,

    /// Override the channel (#channel) or send a direct message (@user)
    #[arg(long)]
    pub channel: Option<String>,

    /// Emoji icon name, without colons
    #[arg(long = "icon-emoji", value_name = "NAME")]
    pub icon_emoji: Option<String>,

    /// Icon image URL (ignored if --icon-emoji is set)
    #[arg(long = "icon-url", value_name = "URL")]
    pub icon_url: Option<String>,

    /// Unfurl links in the message
    #[arg(long = "unfurl-links")]
    pub unfurl_links: bool,

    /// Disable markdown for plain messages
    #[arg(long = "no-markdown")]
    pub no_markdown: bool,

    /// Attachment color: good, warning, danger, or a hex value
    #[arg(long)]
    pub color: Option<String>,

    /// Text shown above the attachment
    #[arg(long)]
    pub pretext: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Author link (requires --author)
    #[arg(long = "author-link", value_name = "URL")]
    pub author_link: Option<String>,

    /// Author icon URL (requires --author)
    #[arg(long = "author-icon", value_name = "URL")]
    pub author_icon: Option<String>,

    /// Attachment title
    #[arg(long)]
    pub title: Option<String>,

    /// Title link (requires --title)
    #[arg(long = "title-link", value_name = "URL")]
    pub title_link: Option<String>,

    /// Attachment body text
    #[arg(long = "rich-text")]
    pub rich_text: Option<String>,

    /// Attachment field in 'Title=Value' format (can be specified multiple times)
    #[arg(long = "field", value_name = "TITLE=VALUE")]
    pub fields: Vec<String>,

    /// Short attachment field in 'Title=Value' format (can be specified multiple times)
    #[arg(long = "short-field", value_name = "TITLE=VALUE")]
    pub short_fields: Vec<String>,

    /// `--field` and `--short-field` values in command-line order
    #[arg(skip)]
    pub ordered_fields: Vec<FieldArg>,

    /// Render a section as markdown (can be specified multiple times)
    #[arg(long = "markdown-in", value_enum, value_name = "SECTION")]
    pub markdown_in: Vec<MarkdownSectionArg>,

    /// Footer text
    #[arg(long)]
    pub footer: Option<String>,

    /// Footer Unix timestamp (requires --footer)
    #[arg(long = "footer-ts", value_name = "SECONDS")]
    pub footer_ts: Option<String>,

    /// Footer icon URL (requires --footer)
    #[arg(long = "footer-icon", value_name = "URL")]
    pub footer_icon: Option<String>,

    /// Thumbnail URL
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Image URL (ignored if --thumbnail is set)
    #[arg(long)]
    pub image: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print the JSON payload instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for slack-post
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// One attachment field argument, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldArg {
    /// Raw `Title=Value` text
    pub value: String,
    /// Given with `--short-field`
    pub short: bool,
}

/// Markdown section argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkdownSectionArg {
    /// The pretext above the attachment
    #[value(name = "pretext")]
    Pretext,
    /// The attachment body text
    #[value(name = "text")]
    Text,
    /// The attachment fields
    #[value(name = "fields")]
    Fields,
}

impl From<MarkdownSectionArg> for MarkdownSection {
    fn from(arg: MarkdownSectionArg) -> Self {
        match arg {
            MarkdownSectionArg::Pretext => Self::Pretext,
            MarkdownSectionArg::Text => Self::Text,
            MarkdownSectionArg::Fields => Self::Fields,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_matches(&Self::command().get_matches_from(iter))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let mut cli = Self::from_arg_matches(matches).unwrap_or_else(|e| e.exit());
        cli.ordered_fields = merge_fields(matches, &cli.fields, &cli.short_fields);
        cli
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns true if markdown was requested for `section`.
    #[must_use]
    pub fn markdown_requested(&self, section: MarkdownSection) -> bool {
        self.markdown_in
            .iter()
            .any(|&arg| MarkdownSection::from(arg) == section)
    }
}

/// Interleaves both field flags by their position in the argument list.
fn merge_fields(matches: &ArgMatches, fields: &[String], short_fields: &[String]) -> Vec<FieldArg> {
    let mut indexed: Vec<(usize, FieldArg)> = indexed_fields(matches, "fields", fields, false)
        .chain(indexed_fields(matches, "short_fields", short_fields, true))
        .collect();
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, field)| field).collect()
}

fn indexed_fields<'a>(
    matches: &'a ArgMatches,
    id: &'static str,
    values: &'a [String],
    short: bool,
) -> impl Iterator<Item = (usize, FieldArg)> + 'a {
    matches
        .indices_of(id)
        .into_iter()
        .flatten()
        .zip(values)
        .map(move |(index, value)| {
            (
                index,
                FieldArg {
                    value: value.clone(),
                    short,
                },
            )
        })
}
