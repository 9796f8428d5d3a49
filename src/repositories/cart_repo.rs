//! Cart repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Cart, NewCart, UpdateCart};

#[derive(Clone)]
pub struct CartRepository {
    pool: AsyncDbPool,
}

impl CartRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new cart with a store-assigned identifier.
    pub async fn create(&self, new_cart: NewCart) -> Result<Cart, AppError> {
        use crate::schema::carts::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(carts)
            .values(&new_cart)
            .returning(Cart::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Cart>, AppError> {
        use crate::schema::carts::dsl::*;
        let mut conn = self.pool.get().await?;

        carts
            .find(id)
            .select(Cart::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<Cart>, AppError> {
        use crate::schema::carts::dsl::*;
        let mut conn = self.pool.get().await?;

        carts
            .select(Cart::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Applies the mutable fields to an existing cart.
    pub async fn update(&self, id: i32, changes: UpdateCart) -> Result<Cart, AppError> {
        use crate::schema::carts::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(carts.find(id))
            .set(&changes)
            .returning(Cart::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes by identifier, returning the number of affected rows.
    pub async fn delete(&self, id: i32) -> Result<usize, AppError> {
        use crate::schema::carts::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(carts.find(id))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
