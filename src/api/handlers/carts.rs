//! Cart request handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::api::doc::CART_TAG;
use crate::api::dto::{CartRequest, CartResponse, CollectionResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates cart-related routes.
///
/// Routes:
/// - GET /        - List all carts
/// - POST /       - Create a new cart
/// - GET /{id}    - Get cart by ID
/// - PUT /{id}    - Update cart by ID
/// - DELETE /{id} - Delete cart by ID
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_carts).post(create_cart))
        .route("/{id}", get(get_cart).put(update_cart).delete(delete_cart))
}

/// GET /api/carts - List all carts, composed best-effort.
#[utoipa::path(
    get,
    path = "/api/carts",
    responses(
        (status = 200, description = "All carts with best-effort user views", body = CollectionResponse<CartResponse>)
    ),
    tag = CART_TAG
)]
pub async fn list_carts(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<CartResponse>>, AppError> {
    let carts = state.services.carts.find_all().await?;
    Ok(Json(CollectionResponse::new(carts)))
}

/// GET /api/carts/{id} - Get cart by ID.
#[utoipa::path(
    get,
    path = "/api/carts/{id}",
    params(("id" = i32, Path, description = "Cart identifier")),
    responses(
        (status = 200, description = "Cart found", body = CartResponse),
        (status = 404, description = "No cart with that id"),
    ),
    tag = CART_TAG
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CartResponse>, AppError> {
    Ok(Json(state.services.carts.find_by_id(id).await?))
}

/// POST /api/carts - Create a new cart.
#[utoipa::path(
    post,
    path = "/api/carts",
    request_body = CartRequest,
    responses(
        (status = 201, description = "Cart created", body = CartResponse),
    ),
    tag = CART_TAG
)]
pub async fn create_cart(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CartRequest>,
) -> Result<(StatusCode, Json<CartResponse>), AppError> {
    let cart = state.services.carts.save(payload).await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// PUT /api/carts/{id} - Update cart by ID, preserving the identifier.
#[utoipa::path(
    put,
    path = "/api/carts/{id}",
    params(("id" = i32, Path, description = "Cart identifier")),
    request_body = CartRequest,
    responses(
        (status = 200, description = "Cart updated", body = CartResponse),
        (status = 404, description = "No cart with that id"),
    ),
    tag = CART_TAG
)]
pub async fn update_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CartRequest>,
) -> Result<Json<CartResponse>, AppError> {
    Ok(Json(state.services.carts.update_by_id(id, payload).await?))
}

/// DELETE /api/carts/{id} - Delete cart by ID.
///
/// Idempotent: deleting an absent cart succeeds.
#[utoipa::path(
    delete,
    path = "/api/carts/{id}",
    params(("id" = i32, Path, description = "Cart identifier")),
    responses(
        (status = 204, description = "Cart absent after the call"),
    ),
    tag = CART_TAG
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.services.carts.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
