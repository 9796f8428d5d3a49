use std::sync::LazyLock;

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use regex::Regex;

use crate::error::AppError;

/// Postgres detail line for a unique violation:
/// `Key (user_id, product_id)=(1, 10) already exists.`
static UNIQUE_DETAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Key \((?P<fields>[^)]+)\)=\((?P<values>[^)]+)\) already exists")
        .expect("invalid unique-violation regex")
});

/// Converts Diesel database errors into structured `AppError` variants.
///
/// Composite-key writes rely on the store's own key-uniqueness enforcement;
/// this converter is where a duplicate natural key surfaces as a structured
/// `Duplicate` error instead of an opaque database failure.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                let entity = Self::entity_from_constraint(info.constraint_name(), info.table_name());
                match Self::parse_unique_detail(info.details().unwrap_or_default()) {
                    Some((field, value)) => AppError::Duplicate {
                        entity,
                        field,
                        value,
                    },
                    None => AppError::Duplicate {
                        entity,
                        field: "key".to_string(),
                        value: "unknown".to_string(),
                    },
                }
            }
            DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info) => {
                AppError::Validation {
                    field: info.column_name().unwrap_or("unknown").to_string(),
                    reason: "field is required".to_string(),
                }
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    /// Extracts `(fields, values)` from the Postgres unique-violation detail.
    fn parse_unique_detail(details: &str) -> Option<(String, String)> {
        let captures = UNIQUE_DETAIL.captures(details)?;
        Some((captures["fields"].to_string(), captures["values"].to_string()))
    }

    /// Derives the entity name from a constraint like `favourites_pkey` or
    /// `orders_cart_id_key`, falling back to the table name.
    fn entity_from_constraint(constraint: Option<&str>, table: Option<&str>) -> String {
        constraint
            .and_then(|name| {
                name.strip_suffix("_pkey")
                    .or_else(|| name.split("_").next())
            })
            .or(table)
            .unwrap_or("resource")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unique_violation_detail() {
        let detail = "Key (user_id, product_id, like_date)=(1, 10, 2024-01-01 10:00:00.123456) already exists.";
        let (fields, values) = DatabaseErrorConverter::parse_unique_detail(detail).unwrap();
        assert_eq!(fields, "user_id, product_id, like_date");
        assert_eq!(values, "1, 10, 2024-01-01 10:00:00.123456");
    }

    #[test]
    fn unparseable_detail_yields_none() {
        assert!(DatabaseErrorConverter::parse_unique_detail("something else").is_none());
    }

    #[test]
    fn entity_name_prefers_pkey_constraint() {
        assert_eq!(
            DatabaseErrorConverter::entity_from_constraint(Some("favourites_pkey"), None),
            "favourites"
        );
        assert_eq!(
            DatabaseErrorConverter::entity_from_constraint(Some("orders_cart_id_key"), None),
            "orders"
        );
        assert_eq!(
            DatabaseErrorConverter::entity_from_constraint(None, Some("payments")),
            "payments"
        );
        assert_eq!(
            DatabaseErrorConverter::entity_from_constraint(None, None),
            "resource"
        );
    }

    #[test]
    fn not_found_maps_to_not_found_error() {
        let error = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "lookup");
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn other_errors_keep_operation_context() {
        let error =
            DatabaseErrorConverter::convert_diesel_error(DieselError::BrokenTransactionManager, "insert order");
        match error {
            AppError::Database { operation, .. } => assert_eq!(operation, "insert order"),
            other => panic!("expected Database error, got {other:?}"),
        }
    }
}
