//! Shipping (order item) composition service.
//!
//! Each record references two foreign entities; their fetches are issued
//! concurrently so one slow peer never delays the other resolution.

use futures::future::join_all;

use crate::api::dto::{ShippingRequest, ShippingResponse};
use crate::config::PeersConfig;
use crate::error::{AppError, AppResult};
use crate::keys::OrderItemKey;
use crate::models::OrderItem;
use crate::remote::{view_or_absent, OrderView, ProductView, RemoteClient};
use crate::repositories::OrderItemRepository;

/// Service composing shipping records with product and order views.
#[derive(Clone)]
pub struct ShippingService {
    repo: OrderItemRepository,
    remote: RemoteClient,
    peers: PeersConfig,
}

impl ShippingService {
    pub fn new(repo: OrderItemRepository, remote: RemoteClient, peers: PeersConfig) -> Self {
        Self {
            repo,
            remote,
            peers,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<ShippingResponse>> {
        let items = self.repo.list_all().await?;
        Ok(join_all(items.into_iter().map(|item| self.compose(item))).await)
    }

    pub async fn find_by_key(&self, key: &OrderItemKey) -> AppResult<ShippingResponse> {
        let item = self
            .repo
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("shipping", "key", key.encode()))?;
        Ok(self.compose(item).await)
    }

    /// Persists a new shipping record, then composes the response
    /// best-effort.
    pub async fn save(&self, request: ShippingRequest) -> AppResult<ShippingResponse> {
        let saved = self.repo.insert(request.into_order_item()).await?;
        Ok(self.compose(saved).await)
    }

    /// Replaces the record addressed by the natural key inside the payload,
    /// creating it when absent.
    pub async fn update(&self, request: ShippingRequest) -> AppResult<ShippingResponse> {
        let saved = self.repo.upsert(request.into_order_item()).await?;
        Ok(self.compose(saved).await)
    }

    /// Deletes by natural key. Deleting an absent key is not an error.
    pub async fn delete_by_key(&self, key: &OrderItemKey) -> AppResult<()> {
        self.repo.delete_by_key(key).await?;
        Ok(())
    }

    async fn compose(&self, item: OrderItem) -> ShippingResponse {
        let products_endpoint = self.peers.products_endpoint();
        let orders_endpoint = self.peers.orders_endpoint();
        let (product, order) = tokio::join!(
            self.remote
                .fetch_one::<ProductView>(&products_endpoint, item.product_id),
            self.remote
                .fetch_one::<OrderView>(&orders_endpoint, item.order_id),
        );
        ShippingResponse::compose(
            item,
            view_or_absent("product", product),
            view_or_absent("order", order),
        )
    }
}
