//! Weight-based shipping cost tables.
//!
//! A shipping method can price by cart weight: each line says "from this
//! weight upwards, charge this much". The admin editor produces the lines and
//! checkout looks up the cost for a given weight.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a weight-based cost table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightBasedCost {
    /// Smallest cart weight this line applies to (inclusive).
    pub min_weight: Decimal,
    /// Shipping cost charged from `min_weight` upwards.
    pub cost: Decimal,
}

impl WeightBasedCost {
    /// Create a new line.
    #[must_use]
    pub const fn new(min_weight: Decimal, cost: Decimal) -> Self {
        Self { min_weight, cost }
    }
}

/// A weight-based cost table, kept sorted by `min_weight`.
///
/// Stored as a JSON array in `shipping_method.weight_based_cost`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<WeightBasedCost>", into = "Vec<WeightBasedCost>")]
pub struct WeightBasedCostTable {
    lines: Vec<WeightBasedCost>,
}

impl WeightBasedCostTable {
    /// Build a table from lines in any order.
    ///
    /// Lines are sorted by `min_weight`; for duplicate weights the first
    /// occurrence in input order wins.
    #[must_use]
    pub fn new(mut lines: Vec<WeightBasedCost>) -> Self {
        lines.sort_by(|a, b| a.min_weight.cmp(&b.min_weight));
        lines.dedup_by(|later, earlier| later.min_weight == earlier.min_weight);
        Self { lines }
    }

    /// The lines in ascending `min_weight` order.
    #[must_use]
    pub fn lines(&self) -> &[WeightBasedCost] {
        &self.lines
    }

    /// Whether the table has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cost for a cart of the given weight.
    ///
    /// Picks the line with the greatest `min_weight` not above `weight`.
    /// Returns `None` if the weight is below every line (method unavailable).
    #[must_use]
    pub fn cost_for(&self, weight: Decimal) -> Option<Decimal> {
        self.lines
            .iter()
            .rev()
            .find(|line| line.min_weight <= weight)
            .map(|line| line.cost)
    }
}

impl From<Vec<WeightBasedCost>> for WeightBasedCostTable {
    fn from(lines: Vec<WeightBasedCost>) -> Self {
        Self::new(lines)
    }
}

impl From<WeightBasedCostTable> for Vec<WeightBasedCost> {
    fn from(table: WeightBasedCostTable) -> Self {
        table.lines
    }
}
