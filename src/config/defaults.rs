//! Default values for configuration options.

/// Default output path for `slack-post init`.
pub const CONFIG_FILE: &str = "slack-post.toml";

/// Separator between title and value in `--field` arguments.
pub const FIELD_SEPARATOR: char = '=';
