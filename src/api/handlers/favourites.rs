//! Favourite request handlers.
//!
//! The natural key travels either as three path segments (with the timestamp
//! in its fixed pattern) or as a JSON body on the `/find` and `/delete`
//! routes for clients that cannot URL-encode the timestamp cleanly.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::api::doc::FAVOURITE_TAG;
use crate::api::dto::{CollectionResponse, FavouriteRequest, FavouriteResponse};
use crate::error::AppError;
use crate::keys::FavouriteKey;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates favourite-related routes.
///
/// Routes:
/// - GET /                                     - List all favourites
/// - POST /                                    - Create a favourite
/// - PUT /                                     - Re-assert a favourite
/// - POST /find                                - Look up by key in the body
/// - DELETE /delete                            - Delete by key in the body
/// - GET /{userId}/{productId}/{likeDate}      - Look up by path key
/// - DELETE /{userId}/{productId}/{likeDate}   - Delete by path key
pub fn favourite_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_favourites)
                .post(create_favourite)
                .put(update_favourite),
        )
        .route("/find", post(find_favourite))
        .route("/delete", delete(delete_favourite_by_body))
        .route(
            "/{user_id}/{product_id}/{like_date}",
            get(get_favourite).delete(delete_favourite),
        )
}

/// GET /api/favourites - List all favourites, composed best-effort.
#[utoipa::path(
    get,
    path = "/api/favourites",
    responses(
        (status = 200, description = "All favourites with best-effort views", body = CollectionResponse<FavouriteResponse>)
    ),
    tag = FAVOURITE_TAG
)]
pub async fn list_favourites(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<FavouriteResponse>>, AppError> {
    let favourites = state.services.favourites.find_all().await?;
    Ok(Json(CollectionResponse::new(favourites)))
}

/// GET /api/favourites/{userId}/{productId}/{likeDate} - Look up by path key.
///
/// The timestamp segment must match the fixed pattern exactly; the stored
/// timestamp must be echoed back at full microsecond precision.
#[utoipa::path(
    get,
    path = "/api/favourites/{user_id}/{product_id}/{like_date}",
    params(
        ("user_id" = i32, Path, description = "User component of the key"),
        ("product_id" = i32, Path, description = "Product component of the key"),
        ("like_date" = String, Path, description = "Timestamp component, dd-MM-yyyy__HH:mm:ss:SSSSSS"),
    ),
    responses(
        (status = 200, description = "Favourite found", body = FavouriteResponse),
        (status = 400, description = "Malformed key segment"),
        (status = 404, description = "No favourite with that key"),
    ),
    tag = FAVOURITE_TAG
)]
pub async fn get_favourite(
    State(state): State<AppState>,
    Path((user_id, product_id, like_date)): Path<(i32, i32, String)>,
) -> Result<Json<FavouriteResponse>, AppError> {
    let key = FavouriteKey::from_path(user_id, product_id, &like_date)?;
    Ok(Json(state.services.favourites.find_by_key(&key).await?))
}

/// POST /api/favourites/find - Look up by key carried in the body.
#[utoipa::path(
    post,
    path = "/api/favourites/find",
    request_body = FavouriteKey,
    responses(
        (status = 200, description = "Favourite found", body = FavouriteResponse),
        (status = 404, description = "No favourite with that key"),
    ),
    tag = FAVOURITE_TAG
)]
pub async fn find_favourite(
    State(state): State<AppState>,
    Json(key): Json<FavouriteKey>,
) -> Result<Json<FavouriteResponse>, AppError> {
    Ok(Json(state.services.favourites.find_by_key(&key).await?))
}

/// POST /api/favourites - Create a favourite.
#[utoipa::path(
    post,
    path = "/api/favourites",
    request_body = FavouriteRequest,
    responses(
        (status = 201, description = "Favourite created", body = FavouriteResponse),
        (status = 409, description = "A favourite with that key already exists"),
    ),
    tag = FAVOURITE_TAG
)]
pub async fn create_favourite(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<FavouriteRequest>,
) -> Result<(StatusCode, Json<FavouriteResponse>), AppError> {
    let favourite = state.services.favourites.save(payload).await?;
    Ok((StatusCode::CREATED, Json(favourite)))
}

/// PUT /api/favourites - Re-assert a favourite (idempotent on the key).
#[utoipa::path(
    put,
    path = "/api/favourites",
    request_body = FavouriteRequest,
    responses(
        (status = 200, description = "Favourite present", body = FavouriteResponse),
    ),
    tag = FAVOURITE_TAG
)]
pub async fn update_favourite(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<FavouriteRequest>,
) -> Result<Json<FavouriteResponse>, AppError> {
    Ok(Json(state.services.favourites.update(payload).await?))
}

/// DELETE /api/favourites/{userId}/{productId}/{likeDate} - Delete by path key.
///
/// Idempotent: deleting an absent key succeeds.
#[utoipa::path(
    delete,
    path = "/api/favourites/{user_id}/{product_id}/{like_date}",
    params(
        ("user_id" = i32, Path, description = "User component of the key"),
        ("product_id" = i32, Path, description = "Product component of the key"),
        ("like_date" = String, Path, description = "Timestamp component, dd-MM-yyyy__HH:mm:ss:SSSSSS"),
    ),
    responses(
        (status = 204, description = "Favourite absent after the call"),
        (status = 400, description = "Malformed key segment"),
    ),
    tag = FAVOURITE_TAG
)]
pub async fn delete_favourite(
    State(state): State<AppState>,
    Path((user_id, product_id, like_date)): Path<(i32, i32, String)>,
) -> Result<StatusCode, AppError> {
    let key = FavouriteKey::from_path(user_id, product_id, &like_date)?;
    state.services.favourites.delete_by_key(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/favourites/delete - Delete by key carried in the body.
#[utoipa::path(
    delete,
    path = "/api/favourites/delete",
    request_body = FavouriteKey,
    responses(
        (status = 204, description = "Favourite absent after the call"),
    ),
    tag = FAVOURITE_TAG
)]
pub async fn delete_favourite_by_body(
    State(state): State<AppState>,
    Json(key): Json<FavouriteKey>,
) -> Result<StatusCode, AppError> {
    state.services.favourites.delete_by_key(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}
