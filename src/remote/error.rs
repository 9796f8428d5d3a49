use thiserror::Error;

/// A remote fetch failed.
///
/// Composition treats both kinds identically — an unresolved view — but the
/// distinction is kept for logging and for callers that want to retry.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure, timeout, or non-success status from the peer.
    #[error("remote service unavailable at {url}")]
    Unavailable {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// The peer answered with a success status but an unexpected body shape.
    #[error("remote response from {url} did not match the expected shape")]
    Schema {
        url: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type RemoteResult<T> = Result<T, RemoteError>;
