//! Integration tests for Larder.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p larder-integration-tests
//! ```
//!
//! Tests marked `#[ignore]` need a migrated database in `DATABASE_URL`:
//!
//! ```bash
//! cargo run -p larder-cli -- migrate
//! cargo test -p larder-integration-tests -- --ignored
//! ```
//!
//! # Test Support
//!
//! In-memory stand-ins for the mailer's seams:
//! - [`MemoryOrders`] - [`OrderSource`] over vectors
//! - [`RecordingMailer`] - [`EmailSender`] that records instead of sending
//! - [`sample_order`], [`sample_item`], [`sample_address`] - fixtures
//! - [`LogBuffer`] - captures formatted `tracing` output for assertions

#![allow(clippy::unwrap_used)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use larder_core::{AddressId, OrderId, OrderItemId};
use larder_mailer::db::{OrderSource, RepositoryError};
use larder_mailer::models::{Order, OrderAddress, OrderItem};
use larder_mailer::resend::{EmailSender, OutgoingEmail, ResendError, SentEmail};

/// Parse a decimal literal.
#[must_use]
pub fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// An order in USD with a shipping and billing address id.
#[must_use]
pub fn sample_order(id: i32) -> Order {
    let created_at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
    Order {
        order_id: OrderId::new(id),
        uuid: Uuid::new_v4(),
        order_number: format!("{}", 1000 + id),
        customer_email: "ada@example.com".to_string(),
        customer_full_name: Some("Ada Lovelace".to_string()),
        shipping_address_id: Some(AddressId::new(10)),
        billing_address_id: Some(AddressId::new(11)),
        currency: "USD".to_string(),
        sub_total: d("34.50"),
        tax_amount: d("0"),
        shipping_fee_excl_tax: d("5"),
        grand_total: d("39.50"),
        total_weight: d("1.2"),
        created_at,
        updated_at: created_at,
    }
}

/// A line of `order_id`.
#[must_use]
pub fn sample_item(id: i32, order_id: i32, name: &str, qty: i32, price: &str) -> OrderItem {
    let price = d(price);
    OrderItem {
        order_item_id: OrderItemId::new(id),
        order_item_order_id: OrderId::new(order_id),
        product_id: Some(id),
        product_sku: format!("SKU-{id}"),
        product_name: name.to_string(),
        qty,
        product_price: price,
        final_price: price,
        total: price * Decimal::from(qty),
        product_weight: d("0.4"),
    }
}

/// A California address.
#[must_use]
pub fn sample_address(id: i32) -> OrderAddress {
    OrderAddress {
        order_address_id: AddressId::new(id),
        full_name: Some("Ada Lovelace".to_string()),
        postcode: Some("94016".to_string()),
        telephone: Some("555-0100".to_string()),
        country: "US".to_string(),
        province: Some("US-CA".to_string()),
        city: Some("San Francisco".to_string()),
        address_1: Some("1 Analytical Way".to_string()),
        address_2: None,
    }
}

/// In-memory orders, items and addresses.
///
/// Counts lookups so tests can assert nothing was read.
#[derive(Debug, Default)]
pub struct MemoryOrders {
    pub orders: Vec<Order>,
    pub items: Vec<OrderItem>,
    pub addresses: Vec<OrderAddress>,
    lookups: Mutex<usize>,
}

impl MemoryOrders {
    /// One order with two items and both addresses.
    #[must_use]
    pub fn with_sample_order(id: i32) -> Self {
        Self {
            orders: vec![sample_order(id)],
            items: vec![
                sample_item(1, id, "Blackberry Jam", 2, "8.25"),
                sample_item(2, id, "Earl Grey Tea", 1, "18.00"),
            ],
            addresses: vec![sample_address(10), sample_address(11)],
            lookups: Mutex::new(0),
        }
    }

    /// Number of lookups made so far.
    #[must_use]
    pub fn lookups(&self) -> usize {
        *self.lookups.lock().unwrap()
    }

    fn count(&self) {
        *self.lookups.lock().unwrap() += 1;
    }
}

#[async_trait]
impl OrderSource for MemoryOrders {
    async fn order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        self.count();
        Ok(self.orders.iter().find(|o| o.order_id == id).cloned())
    }

    async fn items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        self.count();
        Ok(self
            .items
            .iter()
            .filter(|i| i.order_item_order_id == order_id)
            .cloned()
            .collect())
    }

    async fn address(&self, id: AddressId) -> Result<Option<OrderAddress>, RepositoryError> {
        self.count();
        Ok(self
            .addresses
            .iter()
            .find(|a| a.order_address_id == id)
            .cloned())
    }
}

/// Records every email instead of sending it.
///
/// `fail_after` makes every send after the first `n` fail.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail_after: Option<usize>,
}

impl RecordingMailer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose sends fail once `n` emails went out.
    #[must_use]
    pub fn failing_after(n: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_after: Some(n),
        }
    }

    /// Emails sent so far.
    #[must_use]
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, ResendError> {
        let mut sent = self.sent.lock().unwrap();
        if self.fail_after.is_some_and(|n| sent.len() >= n) {
            return Err(ResendError::Api {
                status: 422,
                message: "The to field is invalid".to_string(),
            });
        }
        sent.push(email.clone());
        Ok(SentEmail {
            id: format!("email-{}", sent.len()),
        })
    }
}

/// In-memory sink for formatted log lines.
///
/// `capture` installs a subscriber writing here as the thread default, so
/// use it from `#[tokio::test]` (current-thread runtime).
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    /// Route this thread's logs into the buffer until the guard drops.
    #[must_use]
    pub fn capture(&self) -> tracing::subscriber::DefaultGuard {
        let buffer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Everything logged so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
