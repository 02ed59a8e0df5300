//! Shipping method repository.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::instrument;

use larder_core::{ShippingMethodId, WeightBasedCostTable};

use super::RepositoryError;
use crate::models::ShippingMethod;

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct ShippingMethodRow {
    shipping_method_id: ShippingMethodId,
    name: String,
    weight_based_cost: Option<JsonValue>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ShippingMethodRow> for ShippingMethod {
    type Error = RepositoryError;

    fn try_from(row: ShippingMethodRow) -> Result<Self, Self::Error> {
        let weight_based_cost = match row.weight_based_cost {
            None | Some(JsonValue::Null) => WeightBasedCostTable::default(),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                RepositoryError::DataCorruption(format!(
                    "invalid weight_based_cost for shipping method {}: {e}",
                    row.shipping_method_id
                ))
            })?,
        };

        Ok(Self {
            id: row.shipping_method_id,
            name: row.name,
            weight_based_cost,
            updated_at: row.updated_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for shipping method database operations.
pub struct ShippingMethodRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShippingMethodRepository<'a> {
    /// Create a new shipping method repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a shipping method by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored table is invalid.
    #[instrument(skip(self))]
    pub async fn get(&self, id: ShippingMethodId) -> Result<Option<ShippingMethod>, RepositoryError> {
        let row = sqlx::query_as::<_, ShippingMethodRow>(
            r"
            SELECT shipping_method_id, name, weight_based_cost, updated_at
            FROM shipping_method
            WHERE shipping_method_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Replace the weight-based cost table of a shipping method.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the method does not exist.
    /// Returns `RepositoryError::Database` if the update fails.
    #[instrument(skip(self, table), fields(lines = table.lines().len()))]
    pub async fn save_weight_based_cost(
        &self,
        id: ShippingMethodId,
        table: &WeightBasedCostTable,
    ) -> Result<(), RepositoryError> {
        let value = serde_json::to_value(table)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

        let result = sqlx::query(
            r"
            UPDATE shipping_method
            SET weight_based_cost = $2, updated_at = NOW()
            WHERE shipping_method_id = $1
            ",
        )
        .bind(id)
        .bind(value)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
