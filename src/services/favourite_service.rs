//! Favourite composition service.
//!
//! Owns favourite rows locally and resolves the liked product and the liking
//! user from their peer services at read time.

use futures::future::join_all;

use crate::api::dto::{FavouriteRequest, FavouriteResponse};
use crate::config::PeersConfig;
use crate::error::{AppError, AppResult};
use crate::keys::FavouriteKey;
use crate::models::Favourite;
use crate::remote::{view_or_absent, ProductView, RemoteClient, UserView};
use crate::repositories::FavouriteRepository;

/// Service composing favourites with their user and product views.
#[derive(Clone)]
pub struct FavouriteService {
    repo: FavouriteRepository,
    remote: RemoteClient,
    peers: PeersConfig,
}

impl FavouriteService {
    pub fn new(repo: FavouriteRepository, remote: RemoteClient, peers: PeersConfig) -> Self {
        Self {
            repo,
            remote,
            peers,
        }
    }

    /// Lists all favourites, composing each independently. One favourite's
    /// unresolved reference leaves only that view absent; the list itself
    /// always succeeds once the local load has.
    pub async fn find_all(&self) -> AppResult<Vec<FavouriteResponse>> {
        let favourites = self.repo.list_all().await?;
        Ok(join_all(favourites.into_iter().map(|favourite| self.compose(favourite))).await)
    }

    /// Finds one favourite by its full natural key.
    ///
    /// An absent key is `NotFound` regardless of peer health; a present key
    /// composes best-effort.
    pub async fn find_by_key(&self, key: &FavouriteKey) -> AppResult<FavouriteResponse> {
        let favourite = self
            .repo
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("favourite", "key", key.encode()))?;
        Ok(self.compose(favourite).await)
    }

    /// Persists a new favourite, then composes the response best-effort.
    /// The write commits before any remote call is made.
    pub async fn save(&self, request: FavouriteRequest) -> AppResult<FavouriteResponse> {
        let saved = self.repo.insert(request.into_favourite()).await?;
        Ok(self.compose(saved).await)
    }

    /// Re-asserts a favourite. The natural key is the whole row, so this is
    /// an idempotent upsert rather than a field update.
    pub async fn update(&self, request: FavouriteRequest) -> AppResult<FavouriteResponse> {
        let favourite = request.into_favourite();
        self.repo.upsert(favourite.clone()).await?;
        Ok(self.compose(favourite).await)
    }

    /// Deletes by natural key. Deleting an absent key is not an error.
    pub async fn delete_by_key(&self, key: &FavouriteKey) -> AppResult<()> {
        self.repo.delete_by_key(key).await?;
        Ok(())
    }

    /// Resolves both foreign references concurrently and merges the results;
    /// a failed fetch degrades to an absent view without touching the row.
    async fn compose(&self, favourite: Favourite) -> FavouriteResponse {
        let users_endpoint = self.peers.users_endpoint();
        let products_endpoint = self.peers.products_endpoint();
        let (user, product) = tokio::join!(
            self.remote
                .fetch_one::<UserView>(&users_endpoint, favourite.user_id),
            self.remote
                .fetch_one::<ProductView>(&products_endpoint, favourite.product_id),
        );
        FavouriteResponse::compose(
            favourite,
            view_or_absent("user", user),
            view_or_absent("product", product),
        )
    }
}
