//! Order item repository for async database operations.
//!
//! Order items are keyed by the (product_id, order_id) tuple directly; there
//! is no surrogate column.

use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::keys::OrderItemKey;
use crate::models::OrderItem;

#[derive(Clone)]
pub struct OrderItemRepository {
    pool: AsyncDbPool,
}

impl OrderItemRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts an order item. A duplicate natural key surfaces as a unique
    /// violation from the store.
    pub async fn insert(&self, item: OrderItem) -> Result<OrderItem, AppError> {
        use crate::schema::order_items::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(order_items)
            .values(&item)
            .returning(OrderItem::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Inserts or replaces the row addressed by the item's natural key.
    pub async fn upsert(&self, item: OrderItem) -> Result<OrderItem, AppError> {
        use crate::schema::order_items::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(order_items)
            .values(&item)
            .on_conflict((product_id, order_id))
            .do_update()
            .set(ordered_quantity.eq(excluded(ordered_quantity)))
            .returning(OrderItem::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_key(&self, key: &OrderItemKey) -> Result<Option<OrderItem>, AppError> {
        use crate::schema::order_items::dsl::*;
        let mut conn = self.pool.get().await?;

        order_items
            .find((key.product_id, key.order_id))
            .select(OrderItem::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<OrderItem>, AppError> {
        use crate::schema::order_items::dsl::*;
        let mut conn = self.pool.get().await?;

        order_items
            .select(OrderItem::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes by natural key, returning the number of affected rows
    /// (0 when the key was already absent).
    pub async fn delete_by_key(&self, key: &OrderItemKey) -> Result<usize, AppError> {
        use crate::schema::order_items::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(order_items.find((key.product_id, key.order_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
