//! Cart-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Cart, NewCart, UpdateCart};
use crate::remote::UserView;

/// Request body for creating or updating a cart.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CartRequest {
    #[validate(range(min = 1, message = "userId must be a positive identifier"))]
    #[schema(minimum = 1)]
    pub user_id: i32,
}

impl CartRequest {
    pub fn into_new_cart(self) -> NewCart {
        NewCart {
            user_id: self.user_id,
        }
    }

    pub fn into_update_cart(self) -> UpdateCart {
        UpdateCart {
            user_id: self.user_id,
        }
    }
}

/// Composed cart: the owned row plus a best-effort view of its user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub cart_id: i32,
    pub user_id: i32,
    pub user: Option<UserView>,
}

impl CartResponse {
    pub fn compose(cart: Cart, user: Option<UserView>) -> Self {
        Self {
            cart_id: cart.cart_id,
            user_id: cart.user_id,
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_with_absent_user_view() {
        let cart = Cart {
            cart_id: 1,
            user_id: 10,
        };
        let json = serde_json::to_value(CartResponse::compose(cart, None)).unwrap();
        assert_eq!(json["cartId"], 1);
        assert_eq!(json["userId"], 10);
        assert!(json["user"].is_null());
    }
}
