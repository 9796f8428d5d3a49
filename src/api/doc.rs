use utoipa::OpenApi;

pub const FAVOURITE_TAG: &str = "Favourites";
pub const CART_TAG: &str = "Carts";
pub const ORDER_TAG: &str = "Orders";
pub const PAYMENT_TAG: &str = "Payments";
pub const SHIPPING_TAG: &str = "Shippings";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bazaar",
        description = "Cross-service composition API for the bazaar commerce slices",
    ),
    paths(
        crate::api::handlers::favourites::list_favourites,
        crate::api::handlers::favourites::get_favourite,
        crate::api::handlers::favourites::find_favourite,
        crate::api::handlers::favourites::create_favourite,
        crate::api::handlers::favourites::update_favourite,
        crate::api::handlers::favourites::delete_favourite,
        crate::api::handlers::favourites::delete_favourite_by_body,
        crate::api::handlers::carts::list_carts,
        crate::api::handlers::carts::get_cart,
        crate::api::handlers::carts::create_cart,
        crate::api::handlers::carts::update_cart,
        crate::api::handlers::carts::delete_cart,
        crate::api::handlers::orders::list_orders,
        crate::api::handlers::orders::get_order,
        crate::api::handlers::orders::create_order,
        crate::api::handlers::orders::replace_order,
        crate::api::handlers::orders::update_order,
        crate::api::handlers::orders::delete_order,
        crate::api::handlers::payments::list_payments,
        crate::api::handlers::payments::get_payment,
        crate::api::handlers::payments::create_payment,
        crate::api::handlers::payments::replace_payment,
        crate::api::handlers::payments::delete_payment,
        crate::api::handlers::shippings::list_shippings,
        crate::api::handlers::shippings::get_shipping,
        crate::api::handlers::shippings::find_shipping,
        crate::api::handlers::shippings::create_shipping,
        crate::api::handlers::shippings::update_shipping,
        crate::api::handlers::shippings::delete_shipping,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::keys::FavouriteKey,
            crate::keys::OrderItemKey,
            crate::models::PaymentStatus,
            crate::remote::UserView,
            crate::remote::ProductView,
            crate::remote::CartView,
            crate::remote::OrderView,
        )
    ),
    tags(
        (name = FAVOURITE_TAG, description = "Favourite endpoints, keyed by (user, product, timestamp)"),
        (name = CART_TAG, description = "Cart endpoints"),
        (name = ORDER_TAG, description = "Order endpoints"),
        (name = PAYMENT_TAG, description = "Payment endpoints"),
        (name = SHIPPING_TAG, description = "Shipping endpoints, keyed by (product, order)"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
