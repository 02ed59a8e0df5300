//! Event commands.
//!
//! # Usage
//!
//! ```bash
//! larder-cli emit order-placed --order-id 42
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string for the store database

use serde_json::json;
use sqlx::PgPool;
use thiserror::Error;

use larder_core::OrderId;
use larder_mailer::db::{EventRepository, RepositoryError};
use larder_mailer::subscribers::ORDER_PLACED;

use super::database_url;

/// Errors that can occur while queueing events.
#[derive(Debug, Error)]
pub enum EventError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Insert failed.
    #[error("Failed to queue event: {0}")]
    Repository(#[from] RepositoryError),
}

/// Queue an `order_placed` event for the mailer.
pub async fn emit_order_placed(order_id: OrderId) -> Result<(), EventError> {
    let database_url = database_url().ok_or(EventError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    let event = EventRepository::new(pool)
        .emit(ORDER_PLACED, &json!({ "order_id": order_id }))
        .await?;

    tracing::info!(
        event_id = %event.event_id,
        uuid = %event.uuid,
        "Queued {ORDER_PLACED} for order {order_id}"
    );
    Ok(())
}
