//! Email commands.
//!
//! Runs the order confirmation subscriber directly for one order. Useful for
//! checking a template or resending after a failure, since queued events are
//! never retried.
//!
//! # Usage
//!
//! ```bash
//! larder-cli send-confirmation --order-id 42
//! ```
//!
//! Uses the same environment and settings file as `larder-mailer`.

use std::sync::Arc;

use thiserror::Error;

use larder_core::OrderId;
use larder_mailer::config::{ConfigError, MailerConfig};
use larder_mailer::db::{self, OrderRepository};
use larder_mailer::registry::Registry;
use larder_mailer::resend::{ResendClient, ResendError};
use larder_mailer::subscribers::{OrderConfirmationSubscriber, OrderMailError};
use larder_mailer::templates::TemplateRenderer;

/// Errors that can occur while sending.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Resend client error: {0}")]
    Client(#[from] ResendError),

    #[error(transparent)]
    Send(#[from] OrderMailError),
}

/// Send the order confirmation email for `order_id`.
pub async fn send_confirmation(order_id: OrderId) -> Result<(), EmailError> {
    let config = MailerConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    let mailer = config
        .resend_api_key
        .as_ref()
        .map(|key| ResendClient::new(key, &config.resend_base_url))
        .transpose()?;

    let subscriber = OrderConfirmationSubscriber::new(
        Arc::new(config.settings.resend.clone()),
        OrderRepository::new(pool),
        mailer,
        Arc::new(Registry::new()),
        TemplateRenderer::new(&config.working_dir),
    );

    let report = subscriber.send_confirmation(order_id).await?;

    tracing::info!(
        email_id = %report.customer_email_id,
        diagnostic_email_id = report.diagnostic_email_id.as_deref().unwrap_or("-"),
        "Sent order confirmation for order {order_id}"
    );
    Ok(())
}
