use diesel::prelude::*;

/// Cart model for reading from database.
///
/// `user_id` is a foreign reference owned by the user service; it is stored
/// as the raw identifier only, never as a denormalized copy of the user.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::carts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Cart {
    pub cart_id: i32,
    pub user_id: i32,
}

/// NewCart model for inserting new records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::carts)]
pub struct NewCart {
    pub user_id: i32,
}

/// UpdateCart changeset applying the mutable fields of a cart.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::carts)]
pub struct UpdateCart {
    pub user_id: i32,
}
