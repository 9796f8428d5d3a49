//! Read-only projections of entities owned by peer services.
//!
//! Only the identifier is required when deserializing: peers may add or omit
//! attribute fields without breaking composition. A body that lacks the
//! identifier (or is not an object at all) is a schema error, not a partial
//! view.

use jiff::civil;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::keys::timestamp;

/// Projection of a user owned by the user service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub user_id: i32,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Projection of a product owned by the product service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub product_id: i32,
    #[serde(default)]
    pub product_title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price_unit: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

/// Projection of a cart owned by the cart slice of the order service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub cart_id: i32,
    #[serde(default)]
    pub user_id: Option<i32>,
}

/// Projection of an order owned by the order service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub order_id: i32,
    #[serde(default, with = "timestamp::serde_pattern_opt")]
    #[schema(value_type = Option<String>, example = "01-01-2024__10:00:00:123456")]
    pub order_date: Option<civil::DateTime>,
    #[serde(default)]
    pub order_desc: Option<String>,
    #[serde(default)]
    pub order_fee: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_view_tolerates_missing_attributes() {
        let view: UserView = serde_json::from_str(r#"{"userId":1}"#).unwrap();
        assert_eq!(view.user_id, 1);
        assert!(view.email.is_none());
    }

    #[test]
    fn user_view_requires_the_identifier() {
        assert!(serde_json::from_str::<UserView>(r#"{"email":"a@b.c"}"#).is_err());
    }

    #[test]
    fn order_view_parses_patterned_date() {
        let view: OrderView = serde_json::from_str(
            r#"{"orderId":10,"orderDate":"01-01-2024__10:00:00:123456","orderFee":100.0}"#,
        )
        .unwrap();
        assert_eq!(view.order_id, 10);
        assert!(view.order_date.is_some());
        assert_eq!(view.order_fee, Some(100.0));
    }

    #[test]
    fn product_view_ignores_unknown_fields() {
        let view: ProductView =
            serde_json::from_str(r#"{"productId":7,"sku":"abc","category":{"id":1}}"#).unwrap();
        assert_eq!(view.product_id, 7);
    }
}
