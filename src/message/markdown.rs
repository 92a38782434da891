//! Attachment sections that can opt in to markdown rendering.

use std::collections::BTreeSet;

use serde::Serialize;

/// An attachment section named in `mrkdwn_in`.
///
/// Variant order is the emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownSection {
    /// The pretext above the attachment.
    Pretext,
    /// The attachment body text.
    Text,
    /// The attachment fields.
    Fields,
}

/// Set of sections with markdown enabled.
///
/// Iterates in [`MarkdownSection`] order regardless of insertion order,
/// so compiled payloads are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownSections(BTreeSet<MarkdownSection>);

impl MarkdownSections {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Enables markdown for `section`. Enabling twice is a no-op.
    pub fn enable(&mut self, section: MarkdownSection) {
        self.0.insert(section);
    }

    /// Returns the enabled sections in emission order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<MarkdownSection> {
        self.0.iter().copied().collect()
    }
}
