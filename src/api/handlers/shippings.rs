//! Shipping (order item) request handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::api::doc::SHIPPING_TAG;
use crate::api::dto::{CollectionResponse, ShippingRequest, ShippingResponse};
use crate::error::AppError;
use crate::keys::OrderItemKey;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates shipping-related routes.
///
/// Routes:
/// - GET /                           - List all shipping records
/// - POST /                          - Create a shipping record
/// - PUT /                           - Replace by natural key in the body
/// - POST /find                      - Look up by key in the body
/// - GET /{productId}/{orderId}      - Look up by path key
/// - DELETE /{productId}/{orderId}   - Delete by path key
pub fn shipping_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_shippings).post(create_shipping).put(update_shipping),
        )
        .route("/find", post(find_shipping))
        .route(
            "/{product_id}/{order_id}",
            get(get_shipping).delete(delete_shipping),
        )
}

/// GET /api/shippings - List all shipping records, composed best-effort.
#[utoipa::path(
    get,
    path = "/api/shippings",
    responses(
        (status = 200, description = "All shipping records with best-effort views", body = CollectionResponse<ShippingResponse>)
    ),
    tag = SHIPPING_TAG
)]
pub async fn list_shippings(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<ShippingResponse>>, AppError> {
    let shippings = state.services.shippings.find_all().await?;
    Ok(Json(CollectionResponse::new(shippings)))
}

/// GET /api/shippings/{productId}/{orderId} - Look up by path key.
#[utoipa::path(
    get,
    path = "/api/shippings/{product_id}/{order_id}",
    params(
        ("product_id" = i32, Path, description = "Product component of the key"),
        ("order_id" = i32, Path, description = "Order component of the key"),
    ),
    responses(
        (status = 200, description = "Shipping record found", body = ShippingResponse),
        (status = 404, description = "No record with that key"),
    ),
    tag = SHIPPING_TAG
)]
pub async fn get_shipping(
    State(state): State<AppState>,
    Path((product_id, order_id)): Path<(i32, i32)>,
) -> Result<Json<ShippingResponse>, AppError> {
    let key = OrderItemKey::new(product_id, order_id);
    Ok(Json(state.services.shippings.find_by_key(&key).await?))
}

/// POST /api/shippings/find - Look up by key carried in the body.
#[utoipa::path(
    post,
    path = "/api/shippings/find",
    request_body = OrderItemKey,
    responses(
        (status = 200, description = "Shipping record found", body = ShippingResponse),
        (status = 404, description = "No record with that key"),
    ),
    tag = SHIPPING_TAG
)]
pub async fn find_shipping(
    State(state): State<AppState>,
    Json(key): Json<OrderItemKey>,
) -> Result<Json<ShippingResponse>, AppError> {
    Ok(Json(state.services.shippings.find_by_key(&key).await?))
}

/// POST /api/shippings - Create a shipping record.
#[utoipa::path(
    post,
    path = "/api/shippings",
    request_body = ShippingRequest,
    responses(
        (status = 201, description = "Shipping record created", body = ShippingResponse),
        (status = 409, description = "A record with that key already exists"),
    ),
    tag = SHIPPING_TAG
)]
pub async fn create_shipping(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShippingRequest>,
) -> Result<(StatusCode, Json<ShippingResponse>), AppError> {
    let shipping = state.services.shippings.save(payload).await?;
    Ok((StatusCode::CREATED, Json(shipping)))
}

/// PUT /api/shippings - Replace the record addressed by the key in the body.
#[utoipa::path(
    put,
    path = "/api/shippings",
    request_body = ShippingRequest,
    responses(
        (status = 200, description = "Shipping record replaced", body = ShippingResponse),
    ),
    tag = SHIPPING_TAG
)]
pub async fn update_shipping(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShippingRequest>,
) -> Result<Json<ShippingResponse>, AppError> {
    Ok(Json(state.services.shippings.update(payload).await?))
}

/// DELETE /api/shippings/{productId}/{orderId} - Delete by path key.
///
/// Idempotent: deleting an absent key succeeds.
#[utoipa::path(
    delete,
    path = "/api/shippings/{product_id}/{order_id}",
    params(
        ("product_id" = i32, Path, description = "Product component of the key"),
        ("order_id" = i32, Path, description = "Order component of the key"),
    ),
    responses(
        (status = 204, description = "Record absent after the call"),
    ),
    tag = SHIPPING_TAG
)]
pub async fn delete_shipping(
    State(state): State<AppState>,
    Path((product_id, order_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    let key = OrderItemKey::new(product_id, order_id);
    state.services.shippings.delete_by_key(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}
