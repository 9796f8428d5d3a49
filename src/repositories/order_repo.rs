//! Order repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewOrder, Order, UpdateOrder};

#[derive(Clone)]
pub struct OrderRepository {
    pool: AsyncDbPool,
}

impl OrderRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new order with a store-assigned identifier.
    pub async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        use crate::schema::orders::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(orders)
            .values(&new_order)
            .returning(Order::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        use crate::schema::orders::dsl::*;
        let mut conn = self.pool.get().await?;

        orders
            .find(id)
            .select(Order::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<Order>, AppError> {
        use crate::schema::orders::dsl::*;
        let mut conn = self.pool.get().await?;

        orders
            .select(Order::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Replaces the mutable fields of an existing order; the identifier is
    /// preserved. A missing row surfaces as the store's not-found error.
    pub async fn update(&self, id: i32, changes: UpdateOrder) -> Result<Order, AppError> {
        use crate::schema::orders::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(orders.find(id))
            .set(&changes)
            .returning(Order::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes by identifier, returning the number of affected rows.
    pub async fn delete(&self, id: i32) -> Result<usize, AppError> {
        use crate::schema::orders::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(orders.find(id))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
