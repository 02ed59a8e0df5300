//! Order, line item and address records.
//!
//! Field names match the store schema so the records serialize straight into
//! the data handed to email templates (`{{order_number}}`, `{{#each items}}`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_core::{AddressId, Money, OrderId, OrderItemId};

/// A placed order (`"order"` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub order_id: OrderId,
    pub uuid: Uuid,
    pub order_number: String,
    pub customer_email: String,
    pub customer_full_name: Option<String>,
    pub shipping_address_id: Option<AddressId>,
    pub billing_address_id: Option<AddressId>,
    pub currency: String,
    pub sub_total: Decimal,
    pub tax_amount: Decimal,
    pub shipping_fee_excl_tax: Decimal,
    pub grand_total: Decimal,
    pub total_weight: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Format an amount in this order's currency.
    ///
    /// Falls back to the plain number with the raw code when the stored
    /// currency is not a valid ISO code.
    #[must_use]
    pub fn format_amount(&self, amount: Decimal) -> String {
        Money::new(amount, &self.currency).map_or_else(
            |_| format!("{amount} {}", self.currency),
            |money| money.format(),
        )
    }
}

/// A line of an order (`order_item` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    pub order_item_id: OrderItemId,
    pub order_item_order_id: OrderId,
    pub product_id: Option<i32>,
    pub product_sku: String,
    pub product_name: String,
    pub qty: i32,
    pub product_price: Decimal,
    pub final_price: Decimal,
    pub total: Decimal,
    pub product_weight: Decimal,
}

/// A shipping or billing address (`order_address` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderAddress {
    pub order_address_id: AddressId,
    pub full_name: Option<String>,
    pub postcode: Option<String>,
    pub telephone: Option<String>,
    pub country: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
}
