//! Event queue operations.
//!
//! Producers insert rows; the dispatcher claims them oldest first. Claiming
//! deletes the rows, so an event is handed out at most once even with
//! several dispatchers polling the same table.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::Event;

/// Storage the dispatcher consumes events from.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Remove and return the oldest queued events, at most `limit`, in
    /// creation order. A claimed event is never returned again.
    async fn claim(&self, limit: i64) -> Result<Vec<Event>, RepositoryError>;
}

/// Repository for the `event` table.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Queue a new event.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, data))]
    pub async fn emit(&self, name: &str, data: &JsonValue) -> Result<Event, RepositoryError> {
        let event = sqlx::query_as::<_, Event>(
            r"
            INSERT INTO event (uuid, name, data)
            VALUES ($1, $2, $3)
            RETURNING event_id, uuid, name, data, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(data)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }
}

#[async_trait]
impl EventStore for EventRepository {
    #[instrument(skip(self))]
    async fn claim(&self, limit: i64) -> Result<Vec<Event>, RepositoryError> {
        let mut events = sqlx::query_as::<_, Event>(
            r"
            DELETE FROM event
            WHERE event_id IN (
                SELECT event_id
                FROM event
                ORDER BY event_id
                LIMIT $1
                FOR UPDATE SKIP LOCKED
            )
            RETURNING event_id, uuid, name, data, created_at
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        // RETURNING has no defined order
        events.sort_by_key(|e| e.event_id);
        Ok(events)
    }
}
