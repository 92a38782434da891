//! Webhook layer for delivering payloads over HTTP.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Posting compiled payloads ([`WebhookSender`], [`HttpWebhook`])

mod client;
mod error;
mod http;
mod sender;


pub use client::ReqwestClient;
pub use error::{DeliveryError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{HttpWebhook, WebhookSender};
