//! Application state for the Axum web framework.
//!
//! Contains shared services and resources accessible across all request
//! handlers.

use crate::config::PeersConfig;
use crate::db::AsyncDbPool;
use crate::remote::RemoteClient;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Designed for Axum's State extractor. Cloning is cheap since Services,
/// RemoteClient and AsyncDbPool all use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All composition services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Creates a new AppState from a connection pool and peer settings.
    ///
    /// Initializes the repositories, the shared remote client, and the
    /// per-domain composition services.
    pub fn new(pool: AsyncDbPool, peers: PeersConfig) -> Self {
        let repos = Repositories::new(pool.clone());
        let remote = RemoteClient::new(&peers);
        let services = Services::new(repos, remote, peers);
        Self {
            services,
            db_pool: pool,
        }
    }
}
