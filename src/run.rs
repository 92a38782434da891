//! Application execution logic.
//!
//! Compiles the configured message and either prints it (dry run) or
//! posts it once to the webhook.

use std::io::Write;

use thiserror::Error;

use slack_post::DeliveryError;
use slack_post::config::ValidatedConfig;
use slack_post::webhook::{HttpWebhook, ReqwestClient, WebhookSender};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The webhook rejected the message or could not be reached.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// The payload could not be written in dry-run mode.
    #[error("Failed to print payload: {0}")]
    Output(#[source] std::io::Error),

    /// The payload could not be serialized in dry-run mode.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Sends the configured message with the production HTTP client.
///
/// # Errors
///
/// Returns an error if delivery fails, or if printing fails in dry-run mode.
///
/// Excluded from coverage - requires network access.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    let webhook = HttpWebhook::new(ReqwestClient::new());
    execute_with(config, &webhook, &mut std::io::stdout().lock()).await
}

/// Sends (or prints, in dry-run mode) the configured message.
async fn execute_with<W: WebhookSender>(
    config: &ValidatedConfig,
    webhook: &W,
    out: &mut impl Write,
) -> Result<(), RunError> {
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - printing payload instead of sending");
        return print_payload(config, out);
    }

    config.post.send(webhook).await?;
    tracing::info!("Message posted to {}", config.post.address());
    Ok(())
}

fn print_payload(config: &ValidatedConfig, out: &mut impl Write) -> Result<(), RunError> {
    let json = config.post.to_json().map_err(RunError::Serialize)?;
    writeln!(out, "{json}").map_err(RunError::Output)
}
