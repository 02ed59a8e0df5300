//! Larder Mailer library.
//!
//! Consumes domain events from the store database and runs the subscribers
//! registered for them. The only subscriber today is the order confirmation
//! email, delivered through the Resend API.
//!
//! # Modules
//!
//! - [`config`] - Environment variables and the JSON settings file
//! - [`db`] - Order reads and the event queue
//! - [`events`] - Polling dispatcher
//! - [`registry`] - Named value hooks for extensions
//! - [`resend`] - Resend HTTP client
//! - [`subscribers`] - Event handlers
//! - [`templates`] - Handlebars email templates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod events;
pub mod models;
pub mod registry;
pub mod resend;
pub mod subscribers;
pub mod templates;
