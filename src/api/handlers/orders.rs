//! Order request handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::api::doc::ORDER_TAG;
use crate::api::dto::{CollectionResponse, OrderReplaceRequest, OrderRequest, OrderResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates order-related routes.
///
/// Routes:
/// - GET /        - List all orders
/// - POST /       - Create a new order
/// - PUT /        - Replace an order addressed by the body's identifier
/// - GET /{id}    - Get order by ID
/// - PUT /{id}    - Update order by ID
/// - DELETE /{id} - Delete order by ID
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_orders).post(create_order).put(replace_order),
        )
        .route(
            "/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// GET /api/orders - List all orders, composed best-effort.
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders with best-effort cart views", body = CollectionResponse<OrderResponse>)
    ),
    tag = ORDER_TAG
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<OrderResponse>>, AppError> {
    let orders = state.services.orders.find_all().await?;
    Ok(Json(CollectionResponse::new(orders)))
}

/// GET /api/orders/{id} - Get order by ID.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "No order with that id"),
    ),
    tag = ORDER_TAG
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrderResponse>, AppError> {
    Ok(Json(state.services.orders.find_by_id(id).await?))
}

/// POST /api/orders - Create a new order.
///
/// The cart reference is validated structurally only; the cart peer being
/// down does not block the write, it only leaves the response's cart view
/// absent.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Invalid payload"),
    ),
    tag = ORDER_TAG
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let order = state.services.orders.save(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /api/orders - Replace the order addressed by the body's identifier.
#[utoipa::path(
    put,
    path = "/api/orders",
    request_body = OrderReplaceRequest,
    responses(
        (status = 200, description = "Order replaced", body = OrderResponse),
        (status = 404, description = "No order with that id"),
    ),
    tag = ORDER_TAG
)]
pub async fn replace_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderReplaceRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    Ok(Json(state.services.orders.update(payload).await?))
}

/// PUT /api/orders/{id} - Update order by ID, preserving the identifier.
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order identifier")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 404, description = "No order with that id"),
    ),
    tag = ORDER_TAG
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<OrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    Ok(Json(state.services.orders.update_by_id(id, payload).await?))
}

/// DELETE /api/orders/{id} - Delete order by ID.
///
/// Unlike the other slices, this delete re-validates existence first: an
/// absent identifier is a 404.
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order identifier")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "No order with that id"),
    ),
    tag = ORDER_TAG
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.services.orders.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
