//! Remote client behavior against live in-process peers.
//!
//! Each test spins up a throwaway axum listener playing the role of a peer
//! service, so the full fetch path (connect, status handling,
//! deserialization, timeout) is exercised without any external network.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use bazaar_rs::config::PeersConfig;
use bazaar_rs::remote::{view_or_absent, OrderView, RemoteClient, RemoteError, UserView};

fn client() -> RemoteClient {
    RemoteClient::new(&PeersConfig {
        request_timeout: 2,
        connect_timeout: 1,
        ..PeersConfig::default()
    })
}

/// Serves the router on an ephemeral port and returns its base URL.
async fn spawn_peer(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Reserves an address nothing is listening on.
async fn dead_peer() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn fetches_and_deserializes_a_remote_entity() {
    let router = Router::new().route(
        "/api/users/{id}",
        get(|| async {
            Json(serde_json::json!({
                "userId": 101,
                "firstName": "Amira",
                "email": "amira@example.com"
            }))
        }),
    );
    let base = spawn_peer(router).await;

    let view: UserView = client()
        .fetch_one(&format!("{base}/api/users"), 101)
        .await
        .unwrap();

    assert_eq!(view.user_id, 101);
    assert_eq!(view.first_name.as_deref(), Some("Amira"));
    assert_eq!(view.email.as_deref(), Some("amira@example.com"));
}

#[tokio::test]
async fn tolerates_peers_that_omit_optional_fields() {
    let router = Router::new().route(
        "/api/orders/{id}",
        get(|| async { Json(serde_json::json!({ "orderId": 10 })) }),
    );
    let base = spawn_peer(router).await;

    let view: OrderView = client()
        .fetch_one(&format!("{base}/api/orders"), 10)
        .await
        .unwrap();

    assert_eq!(view.order_id, 10);
    assert!(view.order_date.is_none());
    assert!(view.order_fee.is_none());
}

#[tokio::test]
async fn connection_refused_is_unavailable() {
    let base = dead_peer().await;

    let result: Result<UserView, _> = client().fetch_one(&format!("{base}/api/users"), 1).await;

    assert!(matches!(result, Err(RemoteError::Unavailable { .. })));
}

#[tokio::test]
async fn non_success_status_is_unavailable() {
    let router = Router::new().route(
        "/api/users/{id}",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let base = spawn_peer(router).await;

    let result: Result<UserView, _> = client().fetch_one(&format!("{base}/api/users"), 999).await;

    assert!(matches!(result, Err(RemoteError::Unavailable { .. })));
}

#[tokio::test]
async fn success_status_with_wrong_shape_is_a_schema_error() {
    // Success status, but the identifier is missing from the body.
    let router = Router::new().route(
        "/api/users/{id}",
        get(|| async { Json(serde_json::json!({ "email": "nobody@example.com" })) }),
    );
    let base = spawn_peer(router).await;

    let result: Result<UserView, _> = client().fetch_one(&format!("{base}/api/users"), 1).await;

    assert!(matches!(result, Err(RemoteError::Schema { .. })));
}

#[tokio::test]
async fn non_json_body_is_a_schema_error() {
    let router = Router::new().route("/api/users/{id}", get(|| async { "not json" }));
    let base = spawn_peer(router).await;

    let result: Result<UserView, _> = client().fetch_one(&format!("{base}/api/users"), 1).await;

    assert!(matches!(result, Err(RemoteError::Schema { .. })));
}

#[tokio::test]
async fn slow_peers_time_out_as_unavailable() {
    let router = Router::new().route(
        "/api/users/{id}",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(serde_json::json!({ "userId": 1 }))
        }),
    );
    let base = spawn_peer(router).await;

    let result: Result<UserView, _> = client().fetch_one(&format!("{base}/api/users"), 1).await;

    assert!(matches!(result, Err(RemoteError::Unavailable { .. })));
}

#[tokio::test]
async fn failed_fetches_degrade_to_absent_views() {
    let base = dead_peer().await;

    let result: Result<UserView, _> = client().fetch_one(&format!("{base}/api/users"), 1).await;

    assert!(view_or_absent("user", result).is_none());
}
