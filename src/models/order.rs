use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Order model for reading from database.
///
/// `cart_id` references a cart owned by the order peer's cart slice; only the
/// identifier is stored locally.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub order_id: i32,
    pub order_date: DateTime,
    pub order_desc: String,
    pub order_fee: f64,
    pub cart_id: i32,
}

/// NewOrder model for inserting new records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub order_date: DateTime,
    pub order_desc: String,
    pub order_fee: f64,
    pub cart_id: i32,
}

/// UpdateOrder changeset replacing all mutable fields; the identifier is
/// never part of the changeset.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder {
    pub order_date: DateTime,
    pub order_desc: String,
    pub order_fee: f64,
    pub cart_id: i32,
}
