use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payment progress as reported by the payment processor.
///
/// Passed through opaquely: this layer stores and returns the value but
/// manages no transitions between variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    diesel_derive_enum::DbEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[db_enum(existing_type_path = "crate::schema::sql_types::PaymentStatus")]
#[db_enum(value_style = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Payment model for reading from database.
///
/// `order_id` references an order owned by the order service.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payment {
    pub payment_id: i32,
    pub order_id: i32,
    pub is_payed: bool,
    pub payment_status: PaymentStatus,
}

/// NewPayment model for inserting new records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment {
    pub order_id: i32,
    pub is_payed: bool,
    pub payment_status: PaymentStatus,
}

/// UpdatePayment changeset replacing all mutable fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::payments)]
pub struct UpdatePayment {
    pub order_id: i32,
    pub is_payed: bool,
    pub payment_status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_status_uses_screaming_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::NotStarted).unwrap(),
            "\"NOT_STARTED\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentStatus>("\"IN_PROGRESS\"").unwrap(),
            PaymentStatus::InProgress
        );
        assert_eq!(
            serde_json::from_str::<PaymentStatus>("\"COMPLETED\"").unwrap(),
            PaymentStatus::Completed
        );
    }

    #[test]
    fn payment_status_rejects_unknown_values() {
        assert!(serde_json::from_str::<PaymentStatus>("\"REFUNDED\"").is_err());
    }
}
