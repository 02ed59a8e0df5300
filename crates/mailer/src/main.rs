//! Larder Mailer - event dispatcher for transactional email.
//!
//! Polls the `event` table and sends the order confirmation email for each
//! `order_placed` event.
//!
//! Runs without `RESEND_API_KEY`; events are then consumed and each
//! subscriber logs that email is not configured.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use larder_mailer::config::MailerConfig;
use larder_mailer::db::{self, EventRepository, OrderRepository};
use larder_mailer::events::EventDispatcher;
use larder_mailer::registry::Registry;
use larder_mailer::resend::ResendClient;
use larder_mailer::subscribers::{ORDER_PLACED, OrderConfirmationSubscriber};
use larder_mailer::templates::TemplateRenderer;

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &MailerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            attach_stacktrace: true,
            // Order emails carry customer addresses
            send_default_pii: false,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let config = MailerConfig::from_env().expect("Failed to load configuration");

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "larder_mailer=info".into());

    // JSON on Fly.io for structured log parsing, text locally
    let is_fly = std::env::var("FLY_APP_NAME").is_ok();
    let json_layer = is_fly.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_fly).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    let mailer = match &config.resend_api_key {
        Some(key) => Some(
            ResendClient::new(key, &config.resend_base_url)
                .expect("Failed to create Resend client"),
        ),
        None => {
            tracing::warn!("RESEND_API_KEY is not set, order emails will not be sent");
            None
        }
    };

    let order_mail = OrderConfirmationSubscriber::new(
        Arc::new(config.settings.resend.clone()),
        OrderRepository::new(pool.clone()),
        mailer,
        Arc::new(Registry::new()),
        TemplateRenderer::new(&config.working_dir),
    );

    let mut dispatcher = EventDispatcher::new(EventRepository::new(pool), &config.settings.events);
    dispatcher.subscribe(ORDER_PLACED, Arc::new(order_mail));

    dispatcher.run(shutdown_signal()).await;
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, finishing current batch");
}
