//! Event subscribers.
//!
//! A subscriber reacts to one named event. Subscribers own their error
//! handling: `handle` logs failures and returns normally, so one broken
//! subscriber never stops the dispatcher or the other subscribers.
//!
//! # Subscribers
//!
//! - [`OrderConfirmationSubscriber`] - `order_placed`: emails the customer

pub mod email_data;
pub mod order_placed;

use async_trait::async_trait;

use crate::models::Event;

pub use email_data::{EnrichedAddress, OrderEmailData, diagnostic_email_text};
pub use order_placed::{
    EMAIL_DATA_REGISTRY_KEY, ORDER_PLACED, OrderConfirmationSubscriber, OrderMailError, SendReport,
};

/// Handler invoked for a named domain event.
#[async_trait]
pub trait Subscriber: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Handle one event. Must not fail; errors are logged inside.
    async fn handle(&self, event: &Event);
}
