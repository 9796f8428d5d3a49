//! Order composition service.

use futures::future::join_all;

use crate::api::dto::{OrderReplaceRequest, OrderRequest, OrderResponse};
use crate::config::PeersConfig;
use crate::error::{AppError, AppResult};
use crate::models::Order;
use crate::remote::{view_or_absent, CartView, RemoteClient};
use crate::repositories::OrderRepository;

/// Service composing orders with a view of their cart.
#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
    remote: RemoteClient,
    peers: PeersConfig,
}

impl OrderService {
    pub fn new(repo: OrderRepository, remote: RemoteClient, peers: PeersConfig) -> Self {
        Self {
            repo,
            remote,
            peers,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<OrderResponse>> {
        let orders = self.repo.list_all().await?;
        Ok(join_all(orders.into_iter().map(|order| self.compose(order))).await)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<OrderResponse> {
        let order = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("order", "id", id))?;
        Ok(self.compose(order).await)
    }

    /// Persists the order first; the cart view on the response is
    /// best-effort and a failed fetch never rolls the write back.
    pub async fn save(&self, request: OrderRequest) -> AppResult<OrderResponse> {
        let saved = self.repo.create(request.into_new_order()).await?;
        Ok(self.compose(saved).await)
    }

    /// Full replacement addressed by the identifier inside the payload,
    /// persisted directly; absence surfaces from the store.
    pub async fn update(&self, request: OrderReplaceRequest) -> AppResult<OrderResponse> {
        let updated = self
            .repo
            .update(request.order_id, request.order.into_update_order())
            .await?;
        Ok(self.compose(updated).await)
    }

    /// Key-addressed update: the order must exist, its identifier is
    /// preserved, and the payload's mutable fields are applied.
    pub async fn update_by_id(&self, id: i32, request: OrderRequest) -> AppResult<OrderResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("order", "id", id))?;
        let updated = self.repo.update(id, request.into_update_order()).await?;
        Ok(self.compose(updated).await)
    }

    /// Deletes an order after re-validating its existence; an absent
    /// identifier is `NotFound` here, unlike the idempotent delete of the
    /// other slices.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("order", "id", id))?;
        self.repo.delete(id).await?;
        Ok(())
    }

    async fn compose(&self, order: Order) -> OrderResponse {
        let cart = self
            .remote
            .fetch_one::<CartView>(&self.peers.carts_endpoint(), order.cart_id)
            .await;
        OrderResponse::compose(order, view_or_absent("cart", cart))
    }
}
