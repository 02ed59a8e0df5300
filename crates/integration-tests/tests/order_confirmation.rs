//! Order confirmation email behaviour, end to end over in-memory seams.
//!
//! No database or network: orders come from [`MemoryOrders`] and emails are
//! captured by [`RecordingMailer`].

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use larder_core::{EventId, OrderId};
use larder_integration_tests::{LogBuffer, MemoryOrders, RecordingMailer, sample_order};
use larder_mailer::config::{EventSettings, OrderPlacedSettings, ResendSettings};
use larder_mailer::db::{EventStore, RepositoryError};
use larder_mailer::events::EventDispatcher;
use larder_mailer::models::Event;
use larder_mailer::registry::{Registry, RegistryError};
use larder_mailer::subscribers::{
    EMAIL_DATA_REGISTRY_KEY, ORDER_PLACED, OrderConfirmationSubscriber, OrderMailError, Subscriber,
};
use larder_mailer::templates::TemplateRenderer;

const FROM: &str = "Larder <orders@larder.shop>";

type TestSubscriber = OrderConfirmationSubscriber<Arc<MemoryOrders>, Arc<RecordingMailer>>;

fn order_placed(enabled: bool) -> OrderPlacedSettings {
    OrderPlacedSettings {
        enabled,
        ..OrderPlacedSettings::default()
    }
}

struct Harness {
    orders: Arc<MemoryOrders>,
    mailer: Arc<RecordingMailer>,
    subscriber: TestSubscriber,
}

impl Harness {
    fn new(settings: ResendSettings) -> Self {
        Self::build(
            settings,
            MemoryOrders::with_sample_order(1),
            Some(RecordingMailer::new()),
            Registry::new(),
            std::env::temp_dir(),
        )
    }

    fn build(
        settings: ResendSettings,
        orders: MemoryOrders,
        mailer: Option<RecordingMailer>,
        registry: Registry,
        template_dir: PathBuf,
    ) -> Self {
        let orders = Arc::new(orders);
        let mailer = Arc::new(mailer.unwrap_or_default());
        let subscriber = OrderConfirmationSubscriber::new(
            Arc::new(settings),
            Arc::clone(&orders),
            Some(Arc::clone(&mailer)),
            Arc::new(registry),
            TemplateRenderer::new(template_dir),
        );
        Self {
            orders,
            mailer,
            subscriber,
        }
    }
}

fn temp_template(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("emails")).unwrap();
    let relative = PathBuf::from("emails/order_placed.hbs");
    std::fs::write(dir.path().join(&relative), contents).unwrap();
    (dir, relative)
}

// ============================================================================
// Configuration gates
// ============================================================================

#[tokio::test]
async fn test_no_api_key_sends_nothing() {
    let orders = Arc::new(MemoryOrders::with_sample_order(1));
    let subscriber: TestSubscriber = OrderConfirmationSubscriber::new(
        Arc::new(ResendSettings::new(Some(FROM.to_string()), order_placed(true))),
        Arc::clone(&orders),
        None,
        Arc::new(Registry::new()),
        TemplateRenderer::new("."),
    );

    let result = subscriber.send_confirmation(OrderId::new(1)).await;

    assert!(matches!(result, Err(OrderMailError::NotConfigured)));
    assert_eq!(orders.lookups(), 0);
}

#[tokio::test]
async fn test_no_sender_sends_nothing() {
    for from in [None, Some("   ".to_string())] {
        let h = Harness::new(ResendSettings::new(from, order_placed(true)));

        let result = h.subscriber.send_confirmation(OrderId::new(1)).await;

        assert!(matches!(result, Err(OrderMailError::NotConfigured)));
        assert!(h.mailer.sent().is_empty());
        assert_eq!(h.orders.lookups(), 0);
    }
}

#[tokio::test]
async fn test_disabled_sends_nothing() {
    let h = Harness::new(ResendSettings::new(Some(FROM.to_string()), order_placed(false)));

    let result = h.subscriber.send_confirmation(OrderId::new(1)).await;

    assert!(matches!(result, Err(OrderMailError::Disabled)));
    assert!(h.mailer.sent().is_empty());
    assert_eq!(h.orders.lookups(), 0);
}

#[tokio::test]
async fn test_missing_order_sends_nothing() {
    let h = Harness::new(ResendSettings::new(Some(FROM.to_string()), order_placed(true)));

    let result = h.subscriber.send_confirmation(OrderId::new(404)).await;

    assert!(matches!(
        result,
        Err(OrderMailError::OrderNotFound(id)) if id == OrderId::new(404)
    ));
    assert!(h.mailer.sent().is_empty());
}

// ============================================================================
// Emails
// ============================================================================

#[tokio::test]
async fn test_diagnostic_then_fallback_customer_email() {
    let settings = ResendSettings::new(
        Some(FROM.to_string()),
        OrderPlacedSettings {
            diagnostic_to: Some("ops@larder.shop".to_string()),
            ..order_placed(true)
        },
    );
    let h = Harness::new(settings);

    let report = h.subscriber.send_confirmation(OrderId::new(1)).await.unwrap();
    let sent = h.mailer.sent();

    assert_eq!(sent.len(), 2);
    assert_eq!(report.diagnostic_email_id.as_deref(), Some("email-1"));
    assert_eq!(report.customer_email_id, "email-2");

    let notice = &sent[0];
    assert_eq!(notice.from, FROM);
    assert_eq!(notice.to, vec!["ops@larder.shop".to_string()]);
    assert_eq!(notice.subject, "New Order Placed: #1001");
    let text = notice.text.as_deref().unwrap();
    assert!(text.contains("Order Number: 1001"));
    assert!(text.contains("Customer Email: ada@example.com"));
    assert!(text.contains("- Blackberry Jam x 2 = $8.25"));
    assert!(text.contains("- Earl Grey Tea x 1 = $18.00"));
    assert!(text.contains("Province: California"));
    assert!(text.contains("Country: United States"));
    assert!(text.ends_with("Total Price:\n$39.50"));

    let customer = &sent[1];
    assert_eq!(customer.to, vec!["ada@example.com".to_string()]);
    assert_eq!(customer.subject, "Order Confirmation");
    assert_eq!(
        customer.text.as_deref(),
        Some("Your order #1001 has been placed. Thank you for shopping with us.")
    );
    assert_eq!(customer.html, None);
}

#[tokio::test]
async fn test_without_diagnostic_recipient_only_customer_email() {
    let h = Harness::new(ResendSettings::new(Some(FROM.to_string()), order_placed(true)));

    let report = h.subscriber.send_confirmation(OrderId::new(1)).await.unwrap();

    assert_eq!(report.diagnostic_email_id, None);
    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["ada@example.com".to_string()]);
}

#[tokio::test]
async fn test_template_renders_html_body() {
    let (dir, relative) = temp_template(
        "<h1>Order #{{order_number}}</h1>\
         {{#each items}}<li>{{product_name}} x{{qty}}</li>{{/each}}\
         <p>{{shipping_address.city}}, {{shipping_address.country_name}}</p>\
         <p>{{grand_total_text}}</p>",
    );
    let settings = ResendSettings::new(
        Some(FROM.to_string()),
        OrderPlacedSettings {
            subject: Some("Thanks for your order".to_string()),
            template_path: Some(relative),
            ..order_placed(true)
        },
    );
    let h = Harness::build(
        settings,
        MemoryOrders::with_sample_order(1),
        None,
        Registry::new(),
        dir.path().to_path_buf(),
    );

    h.subscriber.send_confirmation(OrderId::new(1)).await.unwrap();

    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Thanks for your order");
    assert_eq!(sent[0].text, None);
    assert_eq!(
        sent[0].html.as_deref(),
        Some(
            "<h1>Order #1001</h1>\
             <li>Blackberry Jam x2</li><li>Earl Grey Tea x1</li>\
             <p>San Francisco, United States</p>\
             <p>$39.50</p>"
        )
    );
}

#[tokio::test]
async fn test_missing_template_file_fails_without_customer_email() {
    let settings = ResendSettings::new(
        Some(FROM.to_string()),
        OrderPlacedSettings {
            template_path: Some(PathBuf::from("emails/definitely-missing.hbs")),
            ..order_placed(true)
        },
    );
    let h = Harness::new(settings);

    let result = h.subscriber.send_confirmation(OrderId::new(1)).await;

    assert!(matches!(result, Err(OrderMailError::Template(_))));
    assert!(h.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_order_without_addresses() {
    let mut orders = MemoryOrders::with_sample_order(1);
    let mut order = sample_order(1);
    order.shipping_address_id = None;
    order.billing_address_id = None;
    orders.orders = vec![order];

    let settings = ResendSettings::new(
        Some(FROM.to_string()),
        OrderPlacedSettings {
            diagnostic_to: Some("ops@larder.shop".to_string()),
            ..order_placed(true)
        },
    );
    let h = Harness::build(settings, orders, None, Registry::new(), std::env::temp_dir());

    h.subscriber.send_confirmation(OrderId::new(1)).await.unwrap();

    let text = h.mailer.sent()[0].text.clone().unwrap();
    assert!(text.contains("Country: \n"));
    assert!(text.contains("- Blackberry Jam x 2 = $8.25"));
}

#[tokio::test]
async fn test_customer_email_failure_leaves_diagnostic_sent() {
    let settings = ResendSettings::new(
        Some(FROM.to_string()),
        OrderPlacedSettings {
            diagnostic_to: Some("ops@larder.shop".to_string()),
            ..order_placed(true)
        },
    );
    let h = Harness::build(
        settings,
        MemoryOrders::with_sample_order(1),
        Some(RecordingMailer::failing_after(1)),
        Registry::new(),
        std::env::temp_dir(),
    );

    let result = h.subscriber.send_confirmation(OrderId::new(1)).await;

    assert!(matches!(result, Err(OrderMailError::Email(_))));
    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New Order Placed: #1001");
}

#[tokio::test]
async fn test_bad_customer_address_still_sends_diagnostic() {
    let mut orders = MemoryOrders::with_sample_order(1);
    let mut order = sample_order(1);
    order.customer_email = "not-an-address".to_string();
    orders.orders = vec![order];

    let settings = ResendSettings::new(
        Some(FROM.to_string()),
        OrderPlacedSettings {
            diagnostic_to: Some("ops@larder.shop".to_string()),
            ..order_placed(true)
        },
    );
    let h = Harness::build(settings, orders, None, Registry::new(), std::env::temp_dir());

    let result = h.subscriber.send_confirmation(OrderId::new(1)).await;

    assert!(matches!(result, Err(OrderMailError::InvalidAddress { .. })));
    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["ops@larder.shop".to_string()]);
}

// ============================================================================
// Registry extension point
// ============================================================================

#[tokio::test]
async fn test_registry_processor_changes_email_data() {
    let mut registry = Registry::new();
    registry.add_processor(EMAIL_DATA_REGISTRY_KEY, 10, |mut data, context| {
        assert_eq!(context["order_id"], 1);
        data["grand_total_text"] = json!("USD 39.50 (paid)");
        Ok(data)
    });

    let settings = ResendSettings::new(
        Some(FROM.to_string()),
        OrderPlacedSettings {
            diagnostic_to: Some("ops@larder.shop".to_string()),
            ..order_placed(true)
        },
    );
    let h = Harness::build(
        settings,
        MemoryOrders::with_sample_order(1),
        None,
        registry,
        std::env::temp_dir(),
    );

    h.subscriber.send_confirmation(OrderId::new(1)).await.unwrap();

    let text = h.mailer.sent()[0].text.clone().unwrap();
    assert!(text.ends_with("USD 39.50 (paid)"));
}

#[tokio::test]
async fn test_registry_failure_sends_nothing() {
    let mut registry = Registry::new();
    registry.add_processor(EMAIL_DATA_REGISTRY_KEY, 0, |_, _| {
        Err(RegistryError::processor(EMAIL_DATA_REGISTRY_KEY, "theme hook failed"))
    });
    let h = Harness::build(
        ResendSettings::new(Some(FROM.to_string()), order_placed(true)),
        MemoryOrders::with_sample_order(1),
        None,
        registry,
        std::env::temp_dir(),
    );

    let result = h.subscriber.send_confirmation(OrderId::new(1)).await;

    assert!(matches!(result, Err(OrderMailError::Registry(_))));
    assert!(h.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_registry_breaking_data_shape_sends_nothing() {
    let mut registry = Registry::new();
    registry.add_processor(EMAIL_DATA_REGISTRY_KEY, 0, |_, _| Ok(json!(null)));
    let h = Harness::build(
        ResendSettings::new(Some(FROM.to_string()), order_placed(true)),
        MemoryOrders::with_sample_order(1),
        None,
        registry,
        std::env::temp_dir(),
    );

    let result = h.subscriber.send_confirmation(OrderId::new(1)).await;

    assert!(matches!(result, Err(OrderMailError::Data(_))));
    assert!(h.mailer.sent().is_empty());
}

// ============================================================================
// Event handling
// ============================================================================

#[derive(Default)]
struct MemoryEvents {
    events: Mutex<Vec<Event>>,
}

#[async_trait]
impl EventStore for MemoryEvents {
    async fn claim(&self, limit: i64) -> Result<Vec<Event>, RepositoryError> {
        let mut events = self.events.lock().unwrap();
        let n = usize::try_from(limit).unwrap().min(events.len());
        Ok(events.drain(..n).collect())
    }
}

fn event(id: i32, data: serde_json::Value) -> Event {
    let mut event = Event::new(ORDER_PLACED, data);
    event.event_id = EventId::new(id);
    event
}

#[tokio::test]
async fn test_handle_logs_errors_without_sending() {
    let logs = LogBuffer::default();
    let _guard = logs.capture();
    let h = Harness::new(ResendSettings::new(Some(FROM.to_string()), order_placed(true)));

    // Bad payload, then an unknown order: both only logged
    h.subscriber.handle(&event(1, json!({"order": 1}))).await;
    h.subscriber.handle(&event(2, json!({"order_id": 999}))).await;

    assert!(h.mailer.sent().is_empty());
    let output = logs.contents();
    assert_eq!(output.matches("Order confirmation email failed").count(), 2);
    assert!(output.contains("ERROR"));
    assert!(output.contains("invalid order_placed payload"));
    assert!(output.contains("order with ID 999 not found"));
}

#[tokio::test]
async fn test_handle_logs_missing_configuration() {
    let logs = LogBuffer::default();
    let _guard = logs.capture();
    let h = Harness::new(ResendSettings::new(None, order_placed(true)));

    h.subscriber.handle(&event(1, json!({"order_id": 1}))).await;

    assert!(h.mailer.sent().is_empty());
    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("RESEND_API_KEY or resend.from is not configured properly"));
}

#[tokio::test]
async fn test_dispatcher_sends_and_drains_queue_even_on_failure() {
    let h = Harness::new(ResendSettings::new(Some(FROM.to_string()), order_placed(true)));
    let mailer = Arc::clone(&h.mailer);

    let store = MemoryEvents {
        events: Mutex::new(vec![
            event(1, json!({"order_id": 999})),
            event(2, json!({"order_id": 1})),
        ]),
    };
    let mut dispatcher = EventDispatcher::new(store, &EventSettings::default());
    dispatcher.subscribe(ORDER_PLACED, Arc::new(h.subscriber));

    let processed = dispatcher.run_once().await.unwrap();

    assert_eq!(processed, 2);
    assert_eq!(mailer.sent().len(), 1);
    assert_eq!(dispatcher.run_once().await.unwrap(), 0);
}
