//! Weight-based shipping price table editor.
//!
//! Holds the rows of the editor between requests: each row is a
//! (min weight, cost) pair as typed plus a random key. The key identifies the
//! row for deletion and never reaches the stored table. Field names follow
//! the row's current array position, so deleting a row renumbers the ones
//! after it.

use std::collections::HashSet;

use rand::Rng;
use rust_decimal::Decimal;

use larder_core::{WeightBasedCost, WeightBasedCostTable};

use crate::forms::{self, FormRow};
use crate::validation::{Rule, ValidationErrors};

/// Length of generated row keys.
pub const ROW_KEY_LEN: usize = 7;

const KEY_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const FIELD_RULES: &[Rule] = &[Rule::NotEmpty, Rule::Number];

/// Message for a row whose min weight is already used by an earlier row.
pub const DUPLICATE_MIN_WEIGHT: &str = "Duplicate min weight";

/// One editable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRow {
    key: String,
    pub min_weight: String,
    pub cost: String,
}

impl EditorRow {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A row prepared for the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRowView {
    pub key: String,
    pub index: usize,
    pub min_weight_name: String,
    pub cost_name: String,
    pub key_name: String,
    pub min_weight: String,
    pub cost: String,
    pub min_weight_error: Option<&'static str>,
    pub cost_error: Option<&'static str>,
}

/// Editor state for one shipping method's weight-based cost table.
#[derive(Debug, Clone, Default)]
pub struct WeightBasedPriceEditor {
    rows: Vec<EditorRow>,
}

impl WeightBasedPriceEditor {
    /// Start editing stored lines. Every line gets a fresh key.
    #[must_use]
    pub fn new(lines: &[WeightBasedCost]) -> Self {
        let mut editor = Self::default();
        for line in lines {
            let key = editor.unique_key();
            editor.rows.push(EditorRow {
                key,
                min_weight: line.min_weight.normalize().to_string(),
                cost: line.cost.normalize().to_string(),
            });
        }
        editor
    }

    /// Rebuild the editor from a submitted form.
    ///
    /// Submitted keys are kept; a missing or repeated key is replaced.
    #[must_use]
    pub fn from_form(rows: Vec<FormRow>) -> Self {
        let mut editor = Self::default();
        for row in rows {
            let key = match row.key {
                Some(key) if !editor.has_key(&key) => key,
                _ => editor.unique_key(),
            };
            editor.rows.push(EditorRow {
                key,
                min_weight: row.min_weight,
                cost: row.cost,
            });
        }
        editor
    }

    /// Append a blank row and return its key.
    pub fn add_line(&mut self) -> String {
        let key = self.unique_key();
        self.rows.push(EditorRow {
            key: key.clone(),
            min_weight: String::new(),
            cost: String::new(),
        });
        key
    }

    /// Remove the row with `key`. Returns whether a row was removed.
    pub fn delete_line(&mut self, key: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.key != key);
        self.rows.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows in display order.
    #[must_use]
    pub fn lines(&self) -> &[EditorRow] {
        &self.rows
    }

    /// Rows with field names for their current position.
    #[must_use]
    pub fn rows(&self) -> Vec<EditorRowView> {
        self.rows_with_errors(&ValidationErrors::new())
    }

    /// Rows with field names and any validation messages attached.
    #[must_use]
    pub fn rows_with_errors(&self, errors: &ValidationErrors) -> Vec<EditorRowView> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let min_weight_name = forms::min_weight_field(index);
                let cost_name = forms::cost_field(index);
                EditorRowView {
                    key: row.key.clone(),
                    index,
                    min_weight_error: errors.get(&min_weight_name),
                    cost_error: errors.get(&cost_name),
                    min_weight_name,
                    cost_name,
                    key_name: forms::key_field(index),
                    min_weight: row.min_weight.clone(),
                    cost: row.cost.clone(),
                }
            })
            .collect()
    }

    /// Validate every field and build the table to store.
    ///
    /// # Errors
    ///
    /// Returns the failing fields, keyed by field name. A row repeating an
    /// earlier row's min weight fails on its min weight field.
    pub fn validate(&self) -> Result<WeightBasedCostTable, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut lines: Vec<WeightBasedCost> = Vec::with_capacity(self.rows.len());

        for (index, row) in self.rows.iter().enumerate() {
            let min_weight_field = forms::min_weight_field(index);
            errors.check(&min_weight_field, &row.min_weight, FIELD_RULES);
            errors.check(forms::cost_field(index), &row.cost, FIELD_RULES);

            let min_weight = row.min_weight.trim().parse::<Decimal>().ok();
            if min_weight.is_some_and(|w| lines.iter().any(|line| line.min_weight == w)) {
                errors.insert(min_weight_field, DUPLICATE_MIN_WEIGHT);
                continue;
            }

            if let (Some(min_weight), Ok(cost)) = (min_weight, row.cost.trim().parse::<Decimal>()) {
                lines.push(WeightBasedCost::new(min_weight, cost));
            }
        }

        if errors.is_empty() {
            Ok(WeightBasedCostTable::new(lines))
        } else {
            Err(errors)
        }
    }

    fn has_key(&self, key: &str) -> bool {
        self.rows.iter().any(|row| row.key == key)
    }

    fn unique_key(&self) -> String {
        let taken: HashSet<&str> = self.rows.iter().map(|row| row.key.as_str()).collect();
        loop {
            let key = random_key();
            if !taken.contains(key.as_str()) {
                return key;
            }
        }
    }
}

/// Random lowercase base-36 key.
fn random_key() -> String {
    let mut rng = rand::rng();
    (0..ROW_KEY_LEN)
        .filter_map(|_| KEY_CHARSET.get(rng.random_range(0..KEY_CHARSET.len())))
        .map(|&b| char::from(b))
        .collect()
}
