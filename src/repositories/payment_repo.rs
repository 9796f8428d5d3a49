//! Payment repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewPayment, Payment, UpdatePayment};

#[derive(Clone)]
pub struct PaymentRepository {
    pool: AsyncDbPool,
}

impl PaymentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new payment with a store-assigned identifier.
    pub async fn create(&self, new_payment: NewPayment) -> Result<Payment, AppError> {
        use crate::schema::payments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(payments)
            .values(&new_payment)
            .returning(Payment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, AppError> {
        use crate::schema::payments::dsl::*;
        let mut conn = self.pool.get().await?;

        payments
            .find(id)
            .select(Payment::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<Payment>, AppError> {
        use crate::schema::payments::dsl::*;
        let mut conn = self.pool.get().await?;

        payments
            .select(Payment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Replaces the mutable fields of an existing payment.
    pub async fn update(&self, id: i32, changes: UpdatePayment) -> Result<Payment, AppError> {
        use crate::schema::payments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(payments.find(id))
            .set(&changes)
            .returning(Payment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes by identifier, returning the number of affected rows.
    pub async fn delete(&self, id: i32) -> Result<usize, AppError> {
        use crate::schema::payments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(payments.find(id))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
