//! Field validation for admin forms.
//!
//! Fields declare a list of rules by name (`notEmpty`, `number`); the first
//! failing rule produces the field's message. Errors are keyed by the form
//! field name so templates can show them next to the input.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// A validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain something other than whitespace.
    NotEmpty,
    /// Value must parse as a decimal number. Empty values pass.
    Number,
}

/// Unknown rule name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown validation rule: {0}")]
pub struct UnknownRule(pub String);

impl Rule {
    /// Message shown when the rule fails.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotEmpty => "This field can not be empty",
            Self::Number => "Invalid number",
        }
    }

    /// Whether `value` satisfies this rule.
    #[must_use]
    pub fn check(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Self::NotEmpty => !value.is_empty(),
            Self::Number => value.is_empty() || value.parse::<Decimal>().is_ok(),
        }
    }
}

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notEmpty" => Ok(Self::NotEmpty),
            "number" => Ok(Self::Number),
            other => Err(UnknownRule(other.to_string())),
        }
    }
}

/// Run `rules` in order and return the first failure message.
#[must_use]
pub fn validate(value: &str, rules: &[Rule]) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| !rule.check(value))
        .map(|rule| rule.message())
}

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, &'static str>,
}

impl ValidationErrors {
    /// Create an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate one field and record its message if it fails.
    pub fn check(&mut self, field: impl Into<String>, value: &str, rules: &[Rule]) {
        if let Some(message) = validate(value, rules) {
            self.fields.insert(field.into(), message);
        }
    }

    /// Record a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: &'static str) {
        self.fields.insert(field.into(), message);
    }

    /// Message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
