//! Typed HTTP fetcher for entities owned by peer services.

use std::fmt::Display;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::PeersConfig;
use crate::remote::{RemoteError, RemoteResult};

/// Fetches single related entities from peer read endpoints.
///
/// One client is shared by all composition services; `reqwest::Client` pools
/// connections internally, so cloning is cheap. Timeouts come from the
/// `[peers]` configuration section and bound every fetch — a slow peer
/// surfaces as [`RemoteError::Unavailable`], never as a hung request.
///
/// The client performs no retries and no caching: every composition call
/// issues a fresh fetch, and retry policy belongs to the caller.
#[derive(Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
}

impl RemoteClient {
    /// Builds a client with the configured per-call timeouts.
    pub fn new(peers: &PeersConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(peers.request_timeout))
            .connect_timeout(Duration::from_secs(peers.connect_timeout))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls()
            .build()
            .expect("Failed to build HTTP client");
        Self { http }
    }

    /// Fetches the entity with the given identifier from `{endpoint}/{id}`
    /// and deserializes it into the caller-specified view type.
    pub async fn fetch_one<T>(&self, endpoint: &str, id: impl Display) -> RemoteResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", endpoint.trim_end_matches('/'), id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|error| RemoteError::Unavailable {
                url: url.clone(),
                source: anyhow::Error::from(error),
            })?;

        let response = response
            .error_for_status()
            .map_err(|error| RemoteError::Unavailable {
                url: url.clone(),
                source: anyhow::Error::from(error),
            })?;

        response
            .json::<T>()
            .await
            .map_err(|error| RemoteError::Schema {
                url,
                source: anyhow::Error::from(error),
            })
    }
}
