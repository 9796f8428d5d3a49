//! Router configuration for the API.
//!
//! Centralized route registration and middleware configuration.

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): request IDs are assigned before the logging layer reads them.
///
/// # Routes
/// - `/api/favourites` - Favourite operations (composite key)
/// - `/api/carts`      - Cart operations
/// - `/api/orders`     - Order operations
/// - `/api/payments`   - Payment operations
/// - `/api/shippings`  - Shipping operations (composite key)
/// - `/health`         - Health probes
/// - `/swagger-ui`     - Interactive API documentation
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/favourites", handlers::favourites::favourite_routes())
        .nest("/carts", handlers::carts::cart_routes())
        .nest("/orders", handlers::orders::order_routes())
        .nest("/payments", handlers::payments::payment_routes())
        .nest("/shippings", handlers::shippings::shipping_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(handlers::health::health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
