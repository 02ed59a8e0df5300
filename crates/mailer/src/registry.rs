//! Named value hooks.
//!
//! A subscriber asks the registry for a named value, passing the value it
//! built itself. Extensions registered under that name get to transform it in
//! priority order before the subscriber carries on. The order confirmation
//! email uses `resend_order_confirmation_email_data` so themes can add fields
//! for their templates.
//!
//! ```
//! use larder_mailer::registry::Registry;
//! use serde_json::json;
//!
//! let mut registry = Registry::new();
//! registry.add_processor("greeting", 10, |mut value, _context| {
//!     value["suffix"] = json!("!");
//!     Ok(value)
//! });
//!
//! let value = registry.get_value("greeting", json!({"text": "hi"}), &json!({})).unwrap();
//! assert_eq!(value["suffix"], "!");
//! ```

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors produced by registry processors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A processor rejected or failed to transform the value.
    #[error("processor for {name:?} failed: {message}")]
    Processor { name: String, message: String },
}

impl RegistryError {
    /// Build a processor failure for `name`.
    pub fn processor(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Processor {
            name: name.into(),
            message: message.into(),
        }
    }
}

type ProcessorFn =
    dyn Fn(JsonValue, &JsonValue) -> Result<JsonValue, RegistryError> + Send + Sync + 'static;

struct Processor {
    priority: i32,
    sequence: u64,
    run: Box<ProcessorFn>,
}

/// Registry of value processors keyed by name.
///
/// Processors are registered during start-up (`&mut self`), after which the
/// registry is shared read-only behind an `Arc`.
#[derive(Default)]
pub struct Registry {
    processors: HashMap<String, Vec<Processor>>,
    next_sequence: u64,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .processors
            .iter()
            .map(|(name, list)| (name.as_str(), list.len()))
            .collect();
        f.debug_struct("Registry")
            .field("processors", &counts)
            .finish()
    }
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a processor for `name`.
    ///
    /// Lower priorities run first; equal priorities run in registration order.
    pub fn add_processor<F>(&mut self, name: impl Into<String>, priority: i32, processor: F)
    where
        F: Fn(JsonValue, &JsonValue) -> Result<JsonValue, RegistryError> + Send + Sync + 'static,
    {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let list = self.processors.entry(name.into()).or_default();
        list.push(Processor {
            priority,
            sequence,
            run: Box::new(processor),
        });
        list.sort_by_key(|p| (p.priority, p.sequence));
    }

    /// Number of processors registered for `name`.
    #[must_use]
    pub fn processor_count(&self, name: &str) -> usize {
        self.processors.get(name).map_or(0, Vec::len)
    }

    /// Run every processor for `name` over `initial`.
    ///
    /// Returns `initial` unchanged when nothing is registered.
    ///
    /// # Errors
    ///
    /// Returns the first processor error; later processors do not run.
    pub fn get_value(
        &self,
        name: &str,
        initial: JsonValue,
        context: &JsonValue,
    ) -> Result<JsonValue, RegistryError> {
        let Some(list) = self.processors.get(name) else {
            return Ok(initial);
        };

        list.iter()
            .try_fold(initial, |value, processor| (processor.run)(value, context))
    }
}
