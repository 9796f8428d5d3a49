//! Favourite repository for async database operations.
//!
//! The favourites table is keyed by the full (user_id, product_id, like_date)
//! tuple; lookups and deletes address rows by that natural key.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff_diesel::DateTime;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::keys::FavouriteKey;
use crate::models::Favourite;

/// Favourite repository holding an async connection pool.
///
/// `AsyncDbPool` uses `Arc` internally, so cloning is cheap.
#[derive(Clone)]
pub struct FavouriteRepository {
    pool: AsyncDbPool,
}

impl FavouriteRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a favourite. A duplicate natural key surfaces as a unique
    /// violation from the store.
    pub async fn insert(&self, favourite: Favourite) -> Result<Favourite, AppError> {
        use crate::schema::favourites::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(favourites)
            .values(&favourite)
            .returning(Favourite::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Inserts a favourite if its key is not present; an existing row with
    /// the same key is left untouched.
    pub async fn upsert(&self, favourite: Favourite) -> Result<(), AppError> {
        use crate::schema::favourites::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(favourites)
            .values(&favourite)
            .on_conflict((user_id, product_id, like_date))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    /// Finds a favourite by its full natural key.
    ///
    /// The timestamp component matches at full microsecond precision; a
    /// truncated timestamp addresses a different (absent) row.
    pub async fn find_by_key(&self, key: &FavouriteKey) -> Result<Option<Favourite>, AppError> {
        use crate::schema::favourites::dsl::*;
        let mut conn = self.pool.get().await?;

        favourites
            .find((key.user_id, key.product_id, DateTime::from(key.like_date)))
            .select(Favourite::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all favourites.
    pub async fn list_all(&self) -> Result<Vec<Favourite>, AppError> {
        use crate::schema::favourites::dsl::*;
        let mut conn = self.pool.get().await?;

        favourites
            .select(Favourite::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes by natural key, returning the number of affected rows
    /// (0 when the key was already absent).
    pub async fn delete_by_key(&self, key: &FavouriteKey) -> Result<usize, AppError> {
        use crate::schema::favourites::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(
            favourites.find((key.user_id, key.product_id, DateTime::from(key.like_date))),
        )
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
