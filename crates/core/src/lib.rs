//! Larder Core - Shared types library.
//!
//! This crate provides common types used across all Larder components:
//! - `mailer` - Event dispatcher and transactional email subscribers
//! - `admin` - Internal administration panel (shipping settings)
//! - `cli` - Command-line tools for migrations and event emission
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, money and shipping costs
//! - [`locale`] - Country and province display names keyed by ISO code

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod locale;
pub mod types;

pub use types::*;
