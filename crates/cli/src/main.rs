//! Larder CLI - Database migrations and event tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! larder-cli migrate
//!
//! # Queue an order_placed event (picked up by larder-mailer)
//! larder-cli emit order-placed --order-id 42
//!
//! # Send the order confirmation email right away, bypassing the queue
//! larder-cli send-confirmation --order-id 42
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `emit` - Queue domain events
//! - `send-confirmation` - Send an order confirmation email

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use larder_core::OrderId;

mod commands;

#[derive(Parser)]
#[command(name = "larder-cli")]
#[command(author, version, about = "Larder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Queue a domain event
    Emit {
        #[command(subcommand)]
        event: EmitEvent,
    },
    /// Send the order confirmation email for an order
    SendConfirmation {
        /// Order ID
        #[arg(short, long)]
        order_id: OrderId,
    },
}

#[derive(Subcommand)]
enum EmitEvent {
    /// Queue an `order_placed` event
    OrderPlaced {
        /// Order ID
        #[arg(short, long)]
        order_id: OrderId,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Emit { event } => match event {
            EmitEvent::OrderPlaced { order_id } => {
                commands::events::emit_order_placed(order_id).await?;
            }
        },
        Commands::SendConfirmation { order_id } => {
            commands::email::send_confirmation(order_id).await?;
        }
    }
    Ok(())
}
