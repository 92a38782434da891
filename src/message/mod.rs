//! Message drafting and payload compilation.
//!
//! This module provides:
//! - The fluent message builder ([`Post`])
//! - The compiled JSON payload ([`Payload`], [`Attachment`], [`Field`])
//! - Markdown section tracking ([`MarkdownSection`], [`MarkdownSections`])
//! - Named attachment colors ([`color`])

pub mod color;
mod error;
mod markdown;
mod payload;
mod post;

#[cfg(test)]
mod post_tests;

pub use error::MessageError;
pub use markdown::{MarkdownSection, MarkdownSections};
pub use payload::{Attachment, Field, Payload};
pub use post::{Post, post};
