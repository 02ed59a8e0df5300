//! Domain events queued in the `event` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use larder_core::EventId;

/// A queued domain event, e.g. `order_placed` with `{"order_id": 12}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub event_id: EventId,
    pub uuid: Uuid,
    pub name: String,
    pub data: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Build an event that has not been stored yet (id 0).
    #[must_use]
    pub fn new(name: impl Into<String>, data: JsonValue) -> Self {
        Self {
            event_id: EventId::new(0),
            uuid: Uuid::new_v4(),
            name: name.into(),
            data,
            created_at: Utc::now(),
        }
    }
}
