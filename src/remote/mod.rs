//! Remote entity access for cross-service composition.
//!
//! Each domain slice stores foreign references as opaque identifiers and
//! resolves them at read time through [`RemoteClient`]. Resolution is
//! best-effort: a failed fetch becomes an absent view, never an error on the
//! composed response.

mod client;
mod error;
mod views;

pub use client::RemoteClient;
pub use error::{RemoteError, RemoteResult};
pub use views::{CartView, OrderView, ProductView, UserView};

/// Absorbs a remote fetch failure into an absent view.
///
/// Both failure kinds degrade identically; the warning keeps the cause
/// observable without ever failing the composed response.
pub fn view_or_absent<T>(domain: &str, result: RemoteResult<T>) -> Option<T> {
    match result {
        Ok(view) => Some(view),
        Err(error) => {
            tracing::warn!(domain = domain, error = %error, "remote view unresolved, leaving absent");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_or_absent_passes_resolved_views_through() {
        let result: RemoteResult<i32> = Ok(7);
        assert_eq!(view_or_absent("user", result), Some(7));
    }

    #[test]
    fn view_or_absent_absorbs_unavailable() {
        let result: RemoteResult<i32> = Err(RemoteError::Unavailable {
            url: "http://localhost:1/api/users/1".to_string(),
            source: anyhow::anyhow!("connection refused"),
        });
        assert_eq!(view_or_absent("user", result), None);
    }

    #[test]
    fn view_or_absent_absorbs_schema_mismatch() {
        let result: RemoteResult<i32> = Err(RemoteError::Schema {
            url: "http://localhost:1/api/users/1".to_string(),
            source: anyhow::anyhow!("expected object"),
        });
        assert_eq!(view_or_absent("user", result), None);
    }
}
