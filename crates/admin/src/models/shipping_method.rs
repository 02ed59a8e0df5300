//! Shipping method model.

use chrono::{DateTime, Utc};

use larder_core::{ShippingMethodId, WeightBasedCostTable};

/// A shipping method with its weight-based cost table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingMethod {
    pub id: ShippingMethodId,
    pub name: String,
    /// Empty when the method has no weight-based pricing yet.
    pub weight_based_cost: WeightBasedCostTable,
    pub updated_at: DateTime<Utc>,
}
