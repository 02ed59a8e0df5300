//! Event dispatcher.
//!
//! Polls the `event` table and hands each event to the subscribers
//! registered for its name. Events are claimed (removed from the queue)
//! before their subscribers run, so a failing subscriber or a crash mid-batch
//! never causes a second delivery; there is no retry.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, instrument};

use crate::config::EventSettings;
use crate::db::{EventStore, RepositoryError};
use crate::models::Event;
use crate::subscribers::Subscriber;

/// Routes queued events to subscribers.
pub struct EventDispatcher<S> {
    store: S,
    subscribers: HashMap<String, Vec<Arc<dyn Subscriber>>>,
    poll_interval: Duration,
    batch_size: i64,
}

impl<S: EventStore> EventDispatcher<S> {
    /// Create a dispatcher with no subscribers.
    #[must_use]
    pub fn new(store: S, settings: &EventSettings) -> Self {
        Self {
            store,
            subscribers: HashMap::new(),
            poll_interval: settings.poll_interval(),
            batch_size: settings.batch_size.max(1),
        }
    }

    /// Register a subscriber for an event name.
    ///
    /// Subscribers for the same name run in registration order.
    pub fn subscribe(&mut self, event_name: impl Into<String>, subscriber: Arc<dyn Subscriber>) {
        self.subscribers
            .entry(event_name.into())
            .or_default()
            .push(subscriber);
    }

    /// Number of subscribers registered for `event_name`.
    #[must_use]
    pub fn subscriber_count(&self, event_name: &str) -> usize {
        self.subscribers.get(event_name).map_or(0, Vec::len)
    }

    /// Claim and process one batch of queued events.
    ///
    /// Returns the number of events taken from the queue.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the queue cannot be read. Nothing is
    /// dispatched in that case.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> Result<usize, RepositoryError> {
        let events = self.store.claim(self.batch_size).await?;

        for event in &events {
            self.dispatch(event).await;
        }

        if !events.is_empty() {
            debug!(count = events.len(), "Processed event batch");
        }
        Ok(events.len())
    }

    async fn dispatch(&self, event: &Event) {
        let Some(subscribers) = self.subscribers.get(&event.name) else {
            debug!(name = %event.name, "No subscribers for event");
            return;
        };

        for subscriber in subscribers {
            debug!(
                name = %event.name,
                subscriber = subscriber.name(),
                "Running subscriber"
            );
            subscriber.handle(event).await;
        }
    }

    /// Poll until `shutdown` resolves.
    ///
    /// A batch in progress is finished before returning. Full batches are
    /// followed immediately by the next poll; otherwise the dispatcher waits
    /// for the poll interval.
    pub async fn run(&self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);
        info!(
            poll_interval_secs = self.poll_interval.as_secs(),
            batch_size = self.batch_size,
            "Event dispatcher started"
        );

        loop {
            let wait = match self.run_once().await {
                Ok(count) if i64::try_from(count).unwrap_or(i64::MAX) >= self.batch_size => {
                    Duration::ZERO
                }
                Ok(_) => self.poll_interval,
                Err(e) => {
                    error!(error = %e, "Failed to read event queue");
                    self.poll_interval
                }
            };

            tokio::select! {
                () = &mut shutdown => break,
                () = tokio::time::sleep(wait) => {}
            }
        }

        info!("Event dispatcher stopped");
    }
}
