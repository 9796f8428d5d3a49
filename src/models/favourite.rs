use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Favourite row: a natural-key entity with no surrogate identifier.
///
/// The full (user_id, product_id, like_date) tuple is the primary key, so one
/// struct serves both reads and inserts — every column participates in
/// identity and none is generated by the store.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::favourites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Favourite {
    pub user_id: i32,
    pub product_id: i32,
    pub like_date: DateTime,
}
