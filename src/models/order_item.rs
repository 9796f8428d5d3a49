use diesel::prelude::*;

/// Order item (shipping record): a natural-key entity identified by the
/// (product_id, order_id) tuple. Both referenced entities live in peer
/// services; only the identifiers are stored.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem {
    pub product_id: i32,
    pub order_id: i32,
    pub ordered_quantity: i32,
}

/// Changeset for the single mutable field of an order item.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::order_items)]
pub struct UpdateOrderItem {
    pub ordered_quantity: i32,
}
