//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all locally-owned domain entities.
//! Simple-key tables use a store-assigned serial identifier; the composite
//! natural-key tables (favourites, order items) are addressed by their full
//! key tuple.

mod cart_repo;
mod favourite_repo;
mod order_item_repo;
mod order_repo;
mod payment_repo;

pub use cart_repo::CartRepository;
pub use favourite_repo::FavouriteRepository;
pub use order_item_repo::OrderItemRepository;
pub use order_repo::OrderRepository;
pub use payment_repo::PaymentRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub favourites: FavouriteRepository,
    pub carts: CartRepository,
    pub orders: OrderRepository,
    pub payments: PaymentRepository,
    pub order_items: OrderItemRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            favourites: FavouriteRepository::new(pool.clone()),
            carts: CartRepository::new(pool.clone()),
            orders: OrderRepository::new(pool.clone()),
            payments: PaymentRepository::new(pool.clone()),
            order_items: OrderItemRepository::new(pool),
        }
    }
}
