//! Composite natural-key types.
//!
//! Favourites and order items have no surrogate identifier: the ordered tuple
//! of key components IS the identity. Both keys round-trip losslessly through
//! a canonical `/`-separated path encoding, and the decoder is strict — it
//! accepts exactly the strings the encoder produces, nothing more.

pub mod timestamp;

use jiff::civil;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A key string could not be parsed back into its components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("expected {expected} key segments, found {found}")]
    SegmentCount { expected: usize, found: usize },

    #[error("segment '{segment}' is not a canonical decimal integer")]
    Integer { segment: String },

    #[error(
        "timestamp segment '{segment}' does not match the pattern {pattern}",
        pattern = timestamp::TIMESTAMP_PATTERN
    )]
    Timestamp { segment: String },
}

/// Natural key of a favourite: who liked what, and exactly when.
///
/// The timestamp participates in equality at full microsecond precision.
/// Callers must echo back the persisted timestamp verbatim to address the
/// record again; the store never generates or adjusts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteKey {
    pub user_id: i32,
    pub product_id: i32,
    #[serde(with = "timestamp::serde_pattern")]
    #[schema(value_type = String, example = "01-01-2024__10:00:00:123456")]
    pub like_date: civil::DateTime,
}

impl FavouriteKey {
    pub fn new(user_id: i32, product_id: i32, like_date: civil::DateTime) -> Self {
        Self {
            user_id,
            product_id,
            like_date,
        }
    }

    /// Builds a key from already-split path segments.
    pub fn from_path(user_id: i32, product_id: i32, like_date: &str) -> Result<Self, KeyError> {
        Ok(Self::new(user_id, product_id, timestamp::decode(like_date)?))
    }

    /// Canonical path encoding: `userId/productId/likeDate`.
    pub fn encode(&self) -> String {
        format!(
            "{}/{}/{}",
            self.user_id,
            self.product_id,
            timestamp::encode(&self.like_date)
        )
    }

    /// Strict inverse of [`encode`](Self::encode).
    pub fn decode(encoded: &str) -> Result<Self, KeyError> {
        let segments: Vec<&str> = encoded.split('/').collect();
        let [user_id, product_id, like_date] = segments.as_slice() else {
            return Err(KeyError::SegmentCount {
                expected: 3,
                found: segments.len(),
            });
        };
        Ok(Self::new(
            decode_int(user_id)?,
            decode_int(product_id)?,
            timestamp::decode(like_date)?,
        ))
    }
}

/// Natural key of an order item: which product on which order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemKey {
    pub product_id: i32,
    pub order_id: i32,
}

impl OrderItemKey {
    pub fn new(product_id: i32, order_id: i32) -> Self {
        Self {
            product_id,
            order_id,
        }
    }

    /// Canonical path encoding: `productId/orderId`.
    pub fn encode(&self) -> String {
        format!("{}/{}", self.product_id, self.order_id)
    }

    /// Strict inverse of [`encode`](Self::encode).
    pub fn decode(encoded: &str) -> Result<Self, KeyError> {
        let segments: Vec<&str> = encoded.split('/').collect();
        let [product_id, order_id] = segments.as_slice() else {
            return Err(KeyError::SegmentCount {
                expected: 2,
                found: segments.len(),
            });
        };
        Ok(Self::new(decode_int(product_id)?, decode_int(order_id)?))
    }
}

/// Parses an integer segment, rejecting any non-canonical rendering
/// (leading zeros, explicit plus sign, surrounding whitespace).
fn decode_int(segment: &str) -> Result<i32, KeyError> {
    let value: i32 = segment.parse().map_err(|_| KeyError::Integer {
        segment: segment.to_string(),
    })?;
    if value.to_string() != segment {
        return Err(KeyError::Integer {
            segment: segment.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn like_date(micros: i32) -> civil::DateTime {
        civil::DateTime::new(2024, 1, 1, 10, 0, 0, micros * 1_000).unwrap()
    }

    #[test]
    fn favourite_key_encodes_in_declared_order() {
        let key = FavouriteKey::new(101, 202, like_date(123_456));
        assert_eq!(key.encode(), "101/202/01-01-2024__10:00:00:123456");
    }

    #[test]
    fn favourite_key_round_trips() {
        let key = FavouriteKey::new(101, 202, like_date(123_456));
        assert_eq!(FavouriteKey::decode(&key.encode()).unwrap(), key);
    }

    #[test]
    fn favourite_key_equality_is_exact_to_the_microsecond() {
        let full = FavouriteKey::new(101, 202, like_date(123_456));
        let truncated = FavouriteKey::new(101, 202, like_date(123_000));
        assert_ne!(full, truncated);
    }

    #[test]
    fn favourite_key_rejects_wrong_segment_count() {
        assert_eq!(
            FavouriteKey::decode("101/202"),
            Err(KeyError::SegmentCount {
                expected: 3,
                found: 2
            })
        );
        assert!(FavouriteKey::decode("101/202/01-01-2024__10:00:00:123456/extra").is_err());
    }

    #[test]
    fn favourite_key_rejects_non_canonical_integers() {
        assert!(FavouriteKey::decode("007/202/01-01-2024__10:00:00:123456").is_err());
        assert!(FavouriteKey::decode("+101/202/01-01-2024__10:00:00:123456").is_err());
        assert!(FavouriteKey::decode(" 101/202/01-01-2024__10:00:00:123456").is_err());
        assert!(FavouriteKey::decode("101.0/202/01-01-2024__10:00:00:123456").is_err());
    }

    #[test]
    fn favourite_key_rejects_millisecond_timestamps() {
        assert!(matches!(
            FavouriteKey::decode("101/202/01-01-2024__10:00:00:123"),
            Err(KeyError::Timestamp { .. })
        ));
    }

    #[test]
    fn favourite_key_deserializes_from_json_body() {
        let key: FavouriteKey = serde_json::from_str(
            r#"{"userId":101,"productId":202,"likeDate":"01-01-2024__10:00:00:123456"}"#,
        )
        .unwrap();
        assert_eq!(key, FavouriteKey::new(101, 202, like_date(123_456)));
    }

    #[test]
    fn favourite_key_serializes_timestamp_in_pattern() {
        let json = serde_json::to_value(FavouriteKey::new(101, 202, like_date(123_456))).unwrap();
        assert_eq!(json["likeDate"], "01-01-2024__10:00:00:123456");
    }

    #[test]
    fn order_item_key_round_trips() {
        let key = OrderItemKey::new(4002, 3001);
        assert_eq!(key.encode(), "4002/3001");
        assert_eq!(OrderItemKey::decode("4002/3001").unwrap(), key);
    }

    #[test]
    fn order_item_key_rejects_malformed_segments() {
        assert!(OrderItemKey::decode("4002").is_err());
        assert!(OrderItemKey::decode("4002/3001/9").is_err());
        assert!(OrderItemKey::decode("4002/03001").is_err());
        assert!(OrderItemKey::decode("4002/").is_err());
    }

    proptest! {
        #[test]
        fn favourite_key_round_trip_law(
            user_id in any::<i32>(),
            product_id in any::<i32>(),
            year in 1i16..=9999,
            month in 1i8..=12,
            day in 1i8..=28,
            hour in 0i8..=23,
            minute in 0i8..=59,
            second in 0i8..=59,
            micros in 0i32..1_000_000,
        ) {
            let like_date = civil::DateTime::new(
                year, month, day, hour, minute, second, micros * 1_000,
            ).unwrap();
            let key = FavouriteKey::new(user_id, product_id, like_date);
            prop_assert_eq!(FavouriteKey::decode(&key.encode()).unwrap(), key);
        }

        #[test]
        fn order_item_key_round_trip_law(product_id in any::<i32>(), order_id in any::<i32>()) {
            let key = OrderItemKey::new(product_id, order_id);
            prop_assert_eq!(OrderItemKey::decode(&key.encode()).unwrap(), key);
        }
    }
}
