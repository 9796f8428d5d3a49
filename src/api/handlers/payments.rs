//! Payment request handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::api::doc::PAYMENT_TAG;
use crate::api::dto::{CollectionResponse, PaymentReplaceRequest, PaymentRequest, PaymentResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates payment-related routes.
///
/// Routes:
/// - GET /        - List all payments
/// - POST /       - Create a new payment
/// - PUT /        - Replace a payment addressed by the body's identifier
/// - GET /{id}    - Get payment by ID
/// - DELETE /{id} - Delete payment by ID
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_payments).post(create_payment).put(replace_payment),
        )
        .route("/{id}", get(get_payment).delete(delete_payment))
}

/// GET /api/payments - List all payments, composed best-effort.
#[utoipa::path(
    get,
    path = "/api/payments",
    responses(
        (status = 200, description = "All payments with best-effort order views", body = CollectionResponse<PaymentResponse>)
    ),
    tag = PAYMENT_TAG
)]
pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<PaymentResponse>>, AppError> {
    let payments = state.services.payments.find_all().await?;
    Ok(Json(CollectionResponse::new(payments)))
}

/// GET /api/payments/{id} - Get payment by ID.
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    params(("id" = i32, Path, description = "Payment identifier")),
    responses(
        (status = 200, description = "Payment found", body = PaymentResponse),
        (status = 404, description = "No payment with that id"),
    ),
    tag = PAYMENT_TAG
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PaymentResponse>, AppError> {
    Ok(Json(state.services.payments.find_by_id(id).await?))
}

/// POST /api/payments - Create a new payment.
#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = PaymentRequest,
    responses(
        (status = 201, description = "Payment created", body = PaymentResponse),
        (status = 400, description = "Invalid payload"),
    ),
    tag = PAYMENT_TAG
)]
pub async fn create_payment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), AppError> {
    let payment = state.services.payments.save(payload).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// PUT /api/payments - Replace the payment addressed by the body's identifier.
#[utoipa::path(
    put,
    path = "/api/payments",
    request_body = PaymentReplaceRequest,
    responses(
        (status = 200, description = "Payment replaced", body = PaymentResponse),
        (status = 404, description = "No payment with that id"),
    ),
    tag = PAYMENT_TAG
)]
pub async fn replace_payment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PaymentReplaceRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    Ok(Json(state.services.payments.update(payload).await?))
}

/// DELETE /api/payments/{id} - Delete payment by ID.
///
/// Idempotent: deleting an absent payment succeeds.
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    params(("id" = i32, Path, description = "Payment identifier")),
    responses(
        (status = 204, description = "Payment absent after the call"),
    ),
    tag = PAYMENT_TAG
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.services.payments.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
