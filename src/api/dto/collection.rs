//! Collection response wrapper.

use serde::Serialize;
use utoipa::ToSchema;

/// Wraps list responses under a single named field instead of a bare array,
/// leaving room to add pagination metadata later without breaking clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse<T> {
    pub collection: Vec<T>,
}

impl<T> CollectionResponse<T> {
    pub fn new(collection: Vec<T>) -> Self {
        Self { collection }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_items_under_the_collection_field() {
        let json = serde_json::to_value(CollectionResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(json, serde_json::json!({ "collection": [1, 2, 3] }));
    }

    #[test]
    fn empty_collections_serialize_as_an_empty_array() {
        let json = serde_json::to_value(CollectionResponse::<i32>::new(vec![])).unwrap();
        assert_eq!(json["collection"].as_array().unwrap().len(), 0);
    }
}
