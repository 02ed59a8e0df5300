//! Resend transactional email API client.
//!
//! # API Reference
//!
//! - Base URL: `https://api.resend.com`
//! - Authentication: `Authorization: Bearer <RESEND_API_KEY>`
//! - Send: `POST /emails` with `{from, to, subject, text?, html?}`, returns `{id}`

mod types;

pub use types::{OutgoingEmail, SentEmail};

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, instrument};

use types::ApiErrorBody;

/// Errors that can occur when sending through Resend.
#[derive(Debug, Error)]
pub enum ResendError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limited by Resend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Unauthorized (invalid API key).
    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    /// Failed to parse response or build the client.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Something that can deliver an email.
///
/// Implemented by [`ResendClient`]; tests substitute a recorder.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one email and return the provider's message id.
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, ResendError>;
}

#[async_trait]
impl<T: EmailSender + ?Sized> EmailSender for Arc<T> {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, ResendError> {
        (**self).send(email).await
    }
}

/// Resend API client.
#[derive(Clone)]
pub struct ResendClient {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ResendClient {
    /// Create a new Resend client.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(api_key: &SecretString, base_url: &str) -> Result<Self, ResendError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", api_key.expose_secret());
        let mut auth = HeaderValue::from_str(&auth_value)
            .map_err(|e| ResendError::Parse(format!("Invalid API key format: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("larder-mailer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Parse error response from the Resend API.
    async fn parse_error(response: reqwest::Response) -> ResendError {
        let status = response.status().as_u16();

        match status {
            401 | 403 => return ResendError::Unauthorized,
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1);
                return ResendError::RateLimited(retry_after);
            }
            _ => {}
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|e| match (e.name, e.message) {
                (Some(name), Some(message)) => Some(format!("{name}: {message}")),
                (None, Some(message)) => Some(message),
                (Some(name), None) => Some(name),
                (None, None) => None,
            })
            .unwrap_or(body);

        ResendError::Api { status, message }
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    #[instrument(skip(self, email), fields(subject = %email.subject))]
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, ResendError> {
        let url = format!("{}/emails", self.base_url);
        let response = self.client.post(&url).json(email).send().await?;

        if !response.status().is_success() {
            return Err(Self::parse_error(response).await);
        }

        let sent: SentEmail = response
            .json()
            .await
            .map_err(|e| ResendError::Parse(format!("Failed to parse response: {e}")))?;

        debug!(email_id = %sent.id, "Resend accepted email");
        Ok(sent)
    }
}
