//! `order_placed` subscriber: order confirmation email.
//!
//! Flow for one event:
//! 1. Check the sender is configured (API key and `resend.from`) and the
//!    email is enabled
//! 2. Load the order, its items, then the shipping and billing addresses
//! 3. Let registry processors adjust the email data
//! 4. Send the internal new-order notice (when a recipient is configured)
//! 5. Send the customer email, from the template file when one is set
//!
//! Failures are logged and the event is considered handled. A failure after
//! step 4 leaves the notice sent; nothing is rolled back or retried.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use larder_core::{Email, EmailError, OrderId};

use super::Subscriber;
use super::email_data::{OrderEmailData, diagnostic_email_text};
use crate::config::ResendSettings;
use crate::db::{OrderSource, RepositoryError};
use crate::models::Event;
use crate::registry::{Registry, RegistryError};
use crate::resend::{EmailSender, OutgoingEmail, ResendError};
use crate::templates::{TemplateError, TemplateRenderer};

/// Event name this subscriber listens to.
pub const ORDER_PLACED: &str = "order_placed";

/// Registry value name for the email data.
pub const EMAIL_DATA_REGISTRY_KEY: &str = "resend_order_confirmation_email_data";

const DEFAULT_SUBJECT: &str = "Order Confirmation";

/// Errors that stop an order confirmation email.
#[derive(Debug, Error)]
pub enum OrderMailError {
    /// API key or sender address missing.
    #[error("RESEND_API_KEY or resend.from is not configured properly")]
    NotConfigured,

    /// `resend.events.order_placed.enabled` is false.
    #[error("order placed email is not enabled")]
    Disabled,

    /// The event payload has no usable `order_id`.
    #[error("invalid order_placed payload: {0}")]
    InvalidPayload(String),

    /// No order with this id.
    #[error("order with ID {0} not found")]
    OrderNotFound(OrderId),

    /// A sender or recipient address is malformed.
    #[error("invalid email address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: EmailError,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Registry processors returned data that no longer has the email shape.
    #[error("email data error: {0}")]
    Data(#[from] serde_json::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("email delivery failed: {0}")]
    Email(#[from] ResendError),
}

/// What was sent for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReport {
    pub order_id: OrderId,
    /// Provider id of the internal notice, if one was sent.
    pub diagnostic_email_id: Option<String>,
    /// Provider id of the customer email.
    pub customer_email_id: String,
}

#[derive(Debug, Deserialize)]
struct OrderPlacedPayload {
    order_id: OrderId,
}

/// Sends the order confirmation email when an order is placed.
pub struct OrderConfirmationSubscriber<O, M> {
    settings: Arc<ResendSettings>,
    orders: O,
    mailer: Option<M>,
    registry: Arc<Registry>,
    templates: TemplateRenderer,
}

impl<O: OrderSource, M: EmailSender> OrderConfirmationSubscriber<O, M> {
    /// Create the subscriber.
    ///
    /// `mailer` is `None` when no API key is configured; every event then
    /// fails with [`OrderMailError::NotConfigured`].
    #[must_use]
    pub const fn new(
        settings: Arc<ResendSettings>,
        orders: O,
        mailer: Option<M>,
        registry: Arc<Registry>,
        templates: TemplateRenderer,
    ) -> Self {
        Self {
            settings,
            orders,
            mailer,
            registry,
            templates,
        }
    }

    /// Extract the order id from an `order_placed` payload.
    ///
    /// # Errors
    ///
    /// Returns [`OrderMailError::InvalidPayload`] if `order_id` is missing or not an integer.
    pub fn order_id_from(data: &serde_json::Value) -> Result<OrderId, OrderMailError> {
        OrderPlacedPayload::deserialize(data)
            .map(|p| p.order_id)
            .map_err(|e| OrderMailError::InvalidPayload(e.to_string()))
    }

    /// Build and send the emails for one order.
    ///
    /// # Errors
    ///
    /// Returns the first failure; see [`OrderMailError`].
    #[instrument(skip(self))]
    pub async fn send_confirmation(&self, order_id: OrderId) -> Result<SendReport, OrderMailError> {
        let (Some(mailer), Some(from)) = (self.mailer.as_ref(), self.settings.from()) else {
            return Err(OrderMailError::NotConfigured);
        };
        let settings = &self.settings.events.order_placed;
        if !settings.enabled {
            return Err(OrderMailError::Disabled);
        }
        let from = checked_address(from)?;

        let order = self
            .orders
            .order(order_id)
            .await?
            .ok_or(OrderMailError::OrderNotFound(order_id))?;
        let customer_email = order.customer_email.clone();
        let order_number = order.order_number.clone();

        let items = self.orders.items(order.order_id).await?;
        let shipping_address = match order.shipping_address_id {
            Some(id) => self.orders.address(id).await?,
            None => None,
        };
        let billing_address = match order.billing_address_id {
            Some(id) => self.orders.address(id).await?,
            None => None,
        };

        let data = OrderEmailData::new(order, items, shipping_address, billing_address);
        let final_value = self.registry.get_value(
            EMAIL_DATA_REGISTRY_KEY,
            serde_json::to_value(&data)?,
            &json!({ "order_id": order_id }),
        )?;
        let final_data: OrderEmailData = serde_json::from_value(final_value.clone())?;

        let diagnostic_email_id = match settings.diagnostic_to() {
            Some(to) => {
                let notice = OutgoingEmail::text(
                    from.as_str(),
                    checked_address(to)?,
                    format!("New Order Placed: #{order_number}"),
                    diagnostic_email_text(&final_data),
                );
                Some(mailer.send(&notice).await?.id)
            }
            None => {
                debug!("No diagnostic recipient configured, skipping new order notice");
                None
            }
        };

        // A bad customer address only stops the customer email
        let recipient = checked_address(&customer_email)?;
        let subject = settings.subject().unwrap_or(DEFAULT_SUBJECT);
        let email = match settings.template_path() {
            Some(path) => {
                let html = self.templates.render_file(path, &final_value).await?;
                OutgoingEmail::html(from, recipient, subject, html)
            }
            None => OutgoingEmail::text(from, recipient, subject, fallback_body(&order_number)),
        };
        let customer_email_id = mailer.send(&email).await?.id;

        Ok(SendReport {
            order_id,
            diagnostic_email_id,
            customer_email_id,
        })
    }
}

#[async_trait]
impl<O: OrderSource, M: EmailSender> Subscriber for OrderConfirmationSubscriber<O, M> {
    fn name(&self) -> &'static str {
        "send_order_confirmation_email"
    }

    async fn handle(&self, event: &Event) {
        let result = match Self::order_id_from(&event.data) {
            Ok(order_id) => self.send_confirmation(order_id).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(report) => info!(
                order_id = %report.order_id,
                email_id = %report.customer_email_id,
                "Email sent successfully for order"
            ),
            Err(e) => error!(
                event_uuid = %event.uuid,
                error = %e,
                "Order confirmation email failed"
            ),
        }
    }
}

/// Customer email body when no template is configured.
#[must_use]
pub fn fallback_body(order_number: &str) -> String {
    format!("Your order #{order_number} has been placed. Thank you for shopping with us.")
}

/// Check an address, which may carry a display name (`Shop <orders@shop.test>`).
fn checked_address(address: &str) -> Result<String, OrderMailError> {
    let address = address.trim();
    let bare = address
        .rsplit_once('<')
        .and_then(|(_, rest)| rest.strip_suffix('>'))
        .unwrap_or(address);

    Email::parse(bare)
        .map(|_| address.to_string())
        .map_err(|source| OrderMailError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::OrderPlacedSettings;
    use crate::models::{Order, OrderAddress, OrderItem};
    use crate::resend::SentEmail;
    use larder_core::AddressId;

    struct NoOrders;

    #[async_trait]
    impl OrderSource for NoOrders {
        async fn order(&self, _id: OrderId) -> Result<Option<Order>, RepositoryError> {
            Ok(None)
        }
        async fn items(&self, _id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
            Ok(vec![])
        }
        async fn address(&self, _id: AddressId) -> Result<Option<OrderAddress>, RepositoryError> {
            Ok(None)
        }
    }

    struct NeverSends;

    #[async_trait]
    impl EmailSender for NeverSends {
        async fn send(&self, _email: &OutgoingEmail) -> Result<SentEmail, ResendError> {
            Err(ResendError::Unauthorized)
        }
    }

    type TestSubscriber = OrderConfirmationSubscriber<NoOrders, NeverSends>;

    #[test]
    fn test_order_id_from_payload() {
        let id = TestSubscriber::order_id_from(&json!({"order_id": 42})).expect("valid payload");
        assert_eq!(id, OrderId::new(42));
    }

    #[test]
    fn test_order_id_from_bad_payload() {
        assert!(matches!(
            TestSubscriber::order_id_from(&json!({"order": 42})),
            Err(OrderMailError::InvalidPayload(_))
        ));
        assert!(matches!(
            TestSubscriber::order_id_from(&json!({"order_id": "abc"})),
            Err(OrderMailError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_fallback_body_mentions_order_number() {
        assert_eq!(
            fallback_body("1001"),
            "Your order #1001 has been placed. Thank you for shopping with us."
        );
    }

    #[test]
    fn test_checked_address_accepts_display_name() {
        assert_eq!(
            checked_address(" Larder <orders@larder.shop> ").unwrap(),
            "Larder <orders@larder.shop>"
        );
        assert_eq!(checked_address("ops@larder.shop").unwrap(), "ops@larder.shop");
        assert!(checked_address("Larder <nope>").is_err());
    }

    #[tokio::test]
    async fn test_invalid_sender_address() {
        let settings = ResendSettings::new(
            Some("not-an-address".to_string()),
            OrderPlacedSettings {
                enabled: true,
                ..OrderPlacedSettings::default()
            },
        );
        let subscriber = TestSubscriber::new(
            Arc::new(settings),
            NoOrders,
            Some(NeverSends),
            Arc::new(Registry::new()),
            TemplateRenderer::new("."),
        );
        let result = subscriber.send_confirmation(OrderId::new(1)).await;
        assert!(matches!(result, Err(OrderMailError::InvalidAddress { .. })));
    }
}
