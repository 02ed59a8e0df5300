//! Larder Admin library.
//!
//! This crate provides the admin functionality as a library,
//! allowing it to be tested and reused.
//!
//! The admin app edits store settings that live in the store database. Today
//! that is the weight-based shipping cost table of each shipping method.
//!
//! Bind to a private interface only; the app has no login of its own.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;
