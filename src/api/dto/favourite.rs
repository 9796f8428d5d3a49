//! Favourite-related DTOs for API requests and responses.

use jiff::civil;
use jiff_diesel::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::keys::timestamp;
use crate::models::Favourite;
use crate::remote::{ProductView, UserView};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating (or re-asserting) a favourite.
///
/// The like timestamp is part of the natural key and always caller-supplied;
/// the service never stamps it itself.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteRequest {
    #[validate(range(min = 1, message = "userId must be a positive identifier"))]
    #[schema(minimum = 1)]
    pub user_id: i32,
    #[validate(range(min = 1, message = "productId must be a positive identifier"))]
    #[schema(minimum = 1)]
    pub product_id: i32,
    #[serde(with = "timestamp::serde_pattern")]
    #[schema(value_type = String, example = "01-01-2024__10:00:00:123456")]
    pub like_date: civil::DateTime,
}

impl FavouriteRequest {
    pub fn into_favourite(self) -> Favourite {
        Favourite {
            user_id: self.user_id,
            product_id: self.product_id,
            like_date: DateTime::from(self.like_date),
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Composed favourite: the owned row plus best-effort views of the liked
/// product and the liking user. A `null` view means the reference could not
/// be resolved; it is not an error.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteResponse {
    pub user_id: i32,
    pub product_id: i32,
    #[serde(with = "timestamp::serde_pattern")]
    #[schema(value_type = String, example = "01-01-2024__10:00:00:123456")]
    pub like_date: civil::DateTime,
    pub user: Option<UserView>,
    pub product: Option<ProductView>,
}

impl FavouriteResponse {
    pub fn compose(
        favourite: Favourite,
        user: Option<UserView>,
        product: Option<ProductView>,
    ) -> Self {
        Self {
            user_id: favourite.user_id,
            product_id: favourite.product_id,
            like_date: favourite.like_date.to_jiff(),
            user,
            product,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favourite() -> Favourite {
        Favourite {
            user_id: 101,
            product_id: 202,
            like_date: DateTime::from(civil::DateTime::new(2024, 1, 1, 10, 0, 0, 123_456_000).unwrap()),
        }
    }

    #[test]
    fn request_parses_patterned_like_date() {
        let request: FavouriteRequest = serde_json::from_str(
            r#"{"userId":101,"productId":202,"likeDate":"01-01-2024__10:00:00:123456"}"#,
        )
        .unwrap();
        assert_eq!(request.user_id, 101);
        assert_eq!(
            request.like_date,
            civil::DateTime::new(2024, 1, 1, 10, 0, 0, 123_456_000).unwrap()
        );
    }

    #[test]
    fn request_rejects_millisecond_like_date() {
        let result = serde_json::from_str::<FavouriteRequest>(
            r#"{"userId":101,"productId":202,"likeDate":"01-01-2024__10:00:00:123"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn request_validation_rejects_non_positive_identifiers() {
        let request: FavouriteRequest = serde_json::from_str(
            r#"{"userId":0,"productId":202,"likeDate":"01-01-2024__10:00:00:123456"}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn unresolved_views_serialize_as_null() {
        let json = serde_json::to_value(FavouriteResponse::compose(favourite(), None, None)).unwrap();
        assert_eq!(json["likeDate"], "01-01-2024__10:00:00:123456");
        assert!(json["user"].is_null());
        assert!(json["product"].is_null());
    }

    #[test]
    fn resolved_views_are_embedded() {
        let user = UserView {
            user_id: 101,
            first_name: Some("Amira".to_string()),
            last_name: None,
            email: None,
            phone: None,
        };
        let json =
            serde_json::to_value(FavouriteResponse::compose(favourite(), Some(user), None)).unwrap();
        assert_eq!(json["user"]["userId"], 101);
        assert_eq!(json["user"]["firstName"], "Amira");
    }
}
