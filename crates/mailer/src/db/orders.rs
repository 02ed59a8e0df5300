//! Order lookups used by email subscribers.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use larder_core::{AddressId, OrderId};

use super::RepositoryError;
use crate::models::{Order, OrderAddress, OrderItem};

/// Read access to orders, items and addresses.
///
/// Implemented by [`OrderRepository`] over `PostgreSQL`; tests substitute
/// an in-memory store.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Load an order by id.
    async fn order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Load the lines of an order, in insertion order.
    async fn items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError>;

    /// Load an address by id.
    async fn address(&self, id: AddressId) -> Result<Option<OrderAddress>, RepositoryError>;
}

#[async_trait]
impl<T: OrderSource + ?Sized> OrderSource for Arc<T> {
    async fn order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        (**self).order(id).await
    }

    async fn items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        (**self).items(order_id).await
    }

    async fn address(&self, id: AddressId) -> Result<Option<OrderAddress>, RepositoryError> {
        (**self).address(id).await
    }
}

/// Repository for order reads.
#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderSource for OrderRepository {
    #[instrument(skip(self))]
    async fn order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, uuid, order_number, customer_email, customer_full_name,
                   shipping_address_id, billing_address_id, currency,
                   sub_total, tax_amount, shipping_fee_excl_tax, grand_total,
                   total_weight, created_at, updated_at
            FROM "order"
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    #[instrument(skip(self))]
    async fn items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT order_item_id, order_item_order_id, product_id, product_sku,
                   product_name, qty, product_price, final_price, total, product_weight
            FROM order_item
            WHERE order_item_order_id = $1
            ORDER BY order_item_id
            ",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn address(&self, id: AddressId) -> Result<Option<OrderAddress>, RepositoryError> {
        let address = sqlx::query_as::<_, OrderAddress>(
            r"
            SELECT order_address_id, full_name, postcode, telephone, country,
                   province, city, address_1, address_2
            FROM order_address
            WHERE order_address_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(address)
    }
}
