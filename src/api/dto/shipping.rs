//! Shipping (order item) DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::OrderItem;
use crate::remote::{OrderView, ProductView};

/// Request body for creating or replacing a shipping record.
///
/// Both identifiers together form the natural key, so create and update take
/// the same shape.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRequest {
    #[validate(range(min = 1, message = "productId must be a positive identifier"))]
    #[schema(minimum = 1)]
    pub product_id: i32,
    #[validate(range(min = 1, message = "orderId must be a positive identifier"))]
    #[schema(minimum = 1)]
    pub order_id: i32,
    #[validate(range(min = 1, message = "orderedQuantity must be at least 1"))]
    #[schema(minimum = 1)]
    pub ordered_quantity: i32,
}

impl ShippingRequest {
    pub fn into_order_item(self) -> OrderItem {
        OrderItem {
            product_id: self.product_id,
            order_id: self.order_id,
            ordered_quantity: self.ordered_quantity,
        }
    }
}

/// Composed shipping record: the owned row plus best-effort views of the
/// shipped product and the order it belongs to.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingResponse {
    pub product_id: i32,
    pub order_id: i32,
    pub ordered_quantity: i32,
    pub product: Option<ProductView>,
    pub order: Option<OrderView>,
}

impl ShippingResponse {
    pub fn compose(item: OrderItem, product: Option<ProductView>, order: Option<OrderView>) -> Self {
        Self {
            product_id: item.product_id,
            order_id: item.order_id,
            ordered_quantity: item.ordered_quantity,
            product,
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_zero_quantity_via_validation() {
        let request: ShippingRequest =
            serde_json::from_str(r#"{"productId":4002,"orderId":3001,"orderedQuantity":0}"#)
                .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn composes_with_partial_views() {
        let item = OrderItem {
            product_id: 4002,
            order_id: 3001,
            ordered_quantity: 5,
        };
        let product = ProductView {
            product_id: 4002,
            product_title: Some("WireMock Product".to_string()),
            image_url: None,
            price_unit: None,
            quantity: None,
        };
        let json = serde_json::to_value(ShippingResponse::compose(item, Some(product), None)).unwrap();
        assert_eq!(json["productId"], 4002);
        assert_eq!(json["product"]["productTitle"], "WireMock Product");
        assert!(json["order"].is_null());
    }
}
