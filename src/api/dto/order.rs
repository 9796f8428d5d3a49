//! Order-related DTOs for API requests and responses.

use jiff::civil;
use jiff_diesel::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::keys::timestamp;
use crate::models::{NewOrder, Order, UpdateOrder};
use crate::remote::CartView;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating an order or updating one addressed by path id.
///
/// `cartId` is the only foreign reference; it is checked structurally here,
/// never against the cart peer (referential integrity is not enforced across
/// services).
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(with = "timestamp::serde_pattern")]
    #[schema(value_type = String, example = "01-01-2024__10:00:00:123456")]
    pub order_date: civil::DateTime,
    #[validate(length(min = 1, max = 255, message = "orderDesc must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255)]
    pub order_desc: String,
    #[validate(range(min = 0.0, message = "orderFee must not be negative"))]
    #[schema(minimum = 0)]
    pub order_fee: f64,
    #[validate(range(min = 1, message = "cartId must be a positive identifier"))]
    #[schema(minimum = 1)]
    pub cart_id: i32,
}

impl OrderRequest {
    pub fn into_new_order(self) -> NewOrder {
        NewOrder {
            order_date: DateTime::from(self.order_date),
            order_desc: self.order_desc,
            order_fee: self.order_fee,
            cart_id: self.cart_id,
        }
    }

    pub fn into_update_order(self) -> UpdateOrder {
        UpdateOrder {
            order_date: DateTime::from(self.order_date),
            order_desc: self.order_desc,
            order_fee: self.order_fee,
            cart_id: self.cart_id,
        }
    }
}

/// Request body for the full-replacement update, carrying its own identifier.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderReplaceRequest {
    #[validate(range(min = 1, message = "orderId must be a positive identifier"))]
    #[schema(minimum = 1)]
    pub order_id: i32,
    #[serde(flatten)]
    #[validate(nested)]
    pub order: OrderRequest,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Composed order: the owned row plus a best-effort view of its cart.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i32,
    #[serde(with = "timestamp::serde_pattern")]
    #[schema(value_type = String, example = "01-01-2024__10:00:00:123456")]
    pub order_date: civil::DateTime,
    pub order_desc: String,
    pub order_fee: f64,
    pub cart_id: i32,
    pub cart: Option<CartView>,
}

impl OrderResponse {
    pub fn compose(order: Order, cart: Option<CartView>) -> Self {
        Self {
            order_id: order.order_id,
            order_date: order.order_date.to_jiff(),
            order_desc: order.order_desc,
            order_fee: order.order_fee,
            cart_id: order.cart_id,
            cart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_requires_the_cart_reference() {
        let result = serde_json::from_str::<OrderRequest>(
            r#"{"orderDate":"01-01-2024__10:00:00:000000","orderDesc":"d","orderFee":1.0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn replace_request_flattens_order_fields() {
        let request: OrderReplaceRequest = serde_json::from_str(
            r#"{"orderId":1,"orderDate":"01-01-2024__10:00:00:000000","orderDesc":"d","orderFee":1.0,"cartId":7}"#,
        )
        .unwrap();
        assert_eq!(request.order_id, 1);
        assert_eq!(request.order.cart_id, 7);
    }

    #[test]
    fn validation_rejects_blank_description() {
        let request: OrderRequest = serde_json::from_str(
            r#"{"orderDate":"01-01-2024__10:00:00:000000","orderDesc":"","orderFee":1.0,"cartId":7}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn composes_with_absent_cart_view() {
        let order = Order {
            order_id: 1,
            order_date: DateTime::from(civil::DateTime::new(2024, 1, 1, 10, 0, 0, 0).unwrap()),
            order_desc: "New Order".to_string(),
            order_fee: 150.0,
            cart_id: 7,
        };
        let json = serde_json::to_value(OrderResponse::compose(order, None)).unwrap();
        assert_eq!(json["orderId"], 1);
        assert_eq!(json["cartId"], 7);
        assert!(json["cart"].is_null());
    }
}
