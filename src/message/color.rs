//! Named attachment colors.
//!
//! Slack renders these keywords with its own palette. Any hex string
//! (for example `"#439FE0"`) is also accepted by [`Post::set_color`](super::Post::set_color).

/// Green side bar.
pub const GOOD: &str = "good";

/// Yellow side bar.
pub const WARNING: &str = "warning";

/// Red side bar.
pub const DANGER: &str = "danger";
