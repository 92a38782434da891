//! slack-post: Slack incoming-webhook messages
//!
//! A library for validating Slack webhook addresses, building messages
//! with a fluent builder, compiling them to the webhook JSON payload,
//! and posting them over HTTPS.
//!
//! ```no_run
//! use slack_post::{color, post};
//! use slack_post::webhook::{HttpWebhook, ReqwestClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut message = post(
//!     "https://hooks.slack.com/services/ABCDEF012/012345ABC/fjdke456HRekdftFOGRPh21s",
//!     "Build #42 failed",
//! )?;
//! message
//!     .set_color(color::DANGER)
//!     .set_title("Build #42", Some("https://ci.example.com/builds/42"))
//!     .add_field("Branch", "main", true);
//!
//! message.send(&HttpWebhook::new(ReqwestClient::new())).await?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod config;
pub mod message;
pub mod webhook;

pub use address::{AddressError, WebhookAddress};
pub use message::{MessageError, Payload, Post, color, post};
pub use webhook::DeliveryError;
