//! Webhook sender trait and HTTP implementation.

use crate::address::WebhookAddress;
use crate::message::Payload;

use super::{DeliveryError, HttpClient, HttpRequest, ReqwestClient};

/// Trait for delivering a compiled payload to a webhook address.
///
/// Lets [`Post::send`](crate::Post::send) run against the real HTTP
/// transport or a test double.
pub trait WebhookSender: Send + Sync {
    /// Posts `payload` to `address`.
    ///
    /// The returned future resolves exactly once, with `Ok(())` only when
    /// the webhook accepted the message.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] if the payload cannot be serialized, the
    /// transport fails, or the response status is not `200 OK`.
    fn send(
        &self,
        address: &WebhookAddress,
        payload: &Payload,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;
}

/// HTTP-based webhook sender.
///
/// Makes exactly one JSON POST per send. Retrying is left to the caller.
///
/// # Example
///
/// ```
/// use slack_post::webhook::{HttpWebhook, ReqwestClient};
///
/// let webhook = HttpWebhook::new(ReqwestClient::new());
/// let _ = format!("{webhook:?}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HttpWebhook<H = ReqwestClient> {
    client: H,
}

impl<H> HttpWebhook<H> {
    /// Creates a webhook sender using `client` as its transport.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> HttpWebhook<H> {
    /// Builds the POST request for `payload`.
    fn build_request(
        address: &WebhookAddress,
        payload: &Payload,
    ) -> Result<HttpRequest, DeliveryError> {
        let body = payload.to_json_bytes()?;
        Ok(HttpRequest::post_json(address.url().clone(), body))
    }
}

impl<H: HttpClient> WebhookSender for HttpWebhook<H> {
    async fn send(&self, address: &WebhookAddress, payload: &Payload) -> Result<(), DeliveryError> {
        let request = Self::build_request(address, payload)?;
        let response = self.client.request(request).await?;

        if response.is_ok() {
            return Ok(());
        }

        Err(DeliveryError::UnexpectedStatus {
            status: response.status,
            body: response
                .body_text()
                .filter(|b| !b.is_empty())
                .map(ToString::to_string),
        })
    }
}
