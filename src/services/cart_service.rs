//! Cart composition service.

use futures::future::join_all;

use crate::api::dto::{CartRequest, CartResponse};
use crate::config::PeersConfig;
use crate::error::{AppError, AppResult};
use crate::models::Cart;
use crate::remote::{view_or_absent, RemoteClient, UserView};
use crate::repositories::CartRepository;

/// Service composing carts with a view of their owning user.
#[derive(Clone)]
pub struct CartService {
    repo: CartRepository,
    remote: RemoteClient,
    peers: PeersConfig,
}

impl CartService {
    pub fn new(repo: CartRepository, remote: RemoteClient, peers: PeersConfig) -> Self {
        Self {
            repo,
            remote,
            peers,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<CartResponse>> {
        let carts = self.repo.list_all().await?;
        Ok(join_all(carts.into_iter().map(|cart| self.compose(cart))).await)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<CartResponse> {
        let cart = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("cart", "id", id))?;
        Ok(self.compose(cart).await)
    }

    /// Persists the cart first; the user view on the response is best-effort.
    pub async fn save(&self, request: CartRequest) -> AppResult<CartResponse> {
        let saved = self.repo.create(request.into_new_cart()).await?;
        Ok(self.compose(saved).await)
    }

    /// Key-addressed update: the cart must exist, its identifier is
    /// preserved, and the payload's mutable fields are applied.
    pub async fn update_by_id(&self, id: i32, request: CartRequest) -> AppResult<CartResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("cart", "id", id))?;
        let updated = self.repo.update(id, request.into_update_cart()).await?;
        Ok(self.compose(updated).await)
    }

    /// Deletes by identifier. Deleting an absent cart is not an error.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        Ok(())
    }

    async fn compose(&self, cart: Cart) -> CartResponse {
        let user = self
            .remote
            .fetch_one::<UserView>(&self.peers.users_endpoint(), cart.user_id)
            .await;
        CartResponse::compose(cart, view_or_absent("user", user))
    }
}
