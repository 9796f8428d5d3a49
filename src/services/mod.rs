//! Service layer for cross-service read composition and writes.
//!
//! Each service owns one domain slice: it loads local rows through its
//! repository, resolves foreign references through the shared
//! [`RemoteClient`](crate::remote::RemoteClient), and merges the results into
//! composed response models. Only local failures (missing entity, malformed
//! key, store errors) escalate to the caller; remote failures degrade to
//! absent views.

mod cart_service;
mod favourite_service;
mod order_service;
mod payment_service;
mod shipping_service;

pub use cart_service::CartService;
pub use favourite_service::FavouriteService;
pub use order_service::OrderService;
pub use payment_service::PaymentService;
pub use shipping_service::ShippingService;

use crate::config::PeersConfig;
use crate::remote::RemoteClient;
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Designed to be used as Axum application state; cloning is cheap since the
/// underlying pool and HTTP client use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub favourites: FavouriteService,
    pub carts: CartService,
    pub orders: OrderService,
    pub payments: PaymentService,
    pub shippings: ShippingService,
}

impl Services {
    /// Creates a new Services instance from repositories and peer settings.
    pub fn new(repos: Repositories, remote: RemoteClient, peers: PeersConfig) -> Self {
        Self {
            favourites: FavouriteService::new(repos.favourites, remote.clone(), peers.clone()),
            carts: CartService::new(repos.carts, remote.clone(), peers.clone()),
            orders: OrderService::new(repos.orders, remote.clone(), peers.clone()),
            payments: PaymentService::new(repos.payments, remote.clone(), peers.clone()),
            shippings: ShippingService::new(repos.order_items, remote, peers),
        }
    }
}
