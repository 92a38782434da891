//! Configuration layer for the `slack-post` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration holding a ready message ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** (`[webhook]` and `[message]` sections)
//!
//! The webhook URL and message text are required. Only envelope options
//! (username, channel, icon, color, unfurling, markdown) can come from the
//! file; attachment content is per-message and CLI-only.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--unfurl-links`, `--no-markdown`) use OR semantics:
//! if set `true` in either CLI or TOML, the result is `true`.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, FieldArg, MarkdownSectionArg};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
