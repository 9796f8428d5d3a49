//! Payment-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{NewPayment, Payment, PaymentStatus, UpdatePayment};
use crate::remote::OrderView;

/// Request body for creating a payment.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(range(min = 1, message = "orderId must be a positive identifier"))]
    #[schema(minimum = 1)]
    pub order_id: i32,
    pub is_payed: bool,
    pub payment_status: PaymentStatus,
}

impl PaymentRequest {
    pub fn into_new_payment(self) -> NewPayment {
        NewPayment {
            order_id: self.order_id,
            is_payed: self.is_payed,
            payment_status: self.payment_status,
        }
    }
}

/// Request body for the full-replacement update, carrying its own identifier.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReplaceRequest {
    #[validate(range(min = 1, message = "paymentId must be a positive identifier"))]
    #[schema(minimum = 1)]
    pub payment_id: i32,
    #[serde(flatten)]
    #[validate(nested)]
    pub payment: PaymentRequest,
}

impl PaymentReplaceRequest {
    pub fn into_update_payment(self) -> UpdatePayment {
        UpdatePayment {
            order_id: self.payment.order_id,
            is_payed: self.payment.is_payed,
            payment_status: self.payment.payment_status,
        }
    }
}

/// Composed payment: the owned row plus a best-effort view of its order.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub payment_id: i32,
    pub order_id: i32,
    pub is_payed: bool,
    pub payment_status: PaymentStatus,
    pub order: Option<OrderView>,
}

impl PaymentResponse {
    pub fn compose(payment: Payment, order: Option<OrderView>) -> Self {
        Self {
            payment_id: payment.payment_id,
            order_id: payment.order_id,
            is_payed: payment.is_payed,
            payment_status: payment.payment_status,
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_opaque_status() {
        let request: PaymentRequest = serde_json::from_str(
            r#"{"orderId":10,"isPayed":false,"paymentStatus":"NOT_STARTED"}"#,
        )
        .unwrap();
        assert_eq!(request.payment_status, PaymentStatus::NotStarted);
        assert!(!request.is_payed);
    }

    #[test]
    fn composes_with_absent_order_view() {
        let payment = Payment {
            payment_id: 1,
            order_id: 10,
            is_payed: true,
            payment_status: PaymentStatus::Completed,
        };
        let json = serde_json::to_value(PaymentResponse::compose(payment, None)).unwrap();
        assert_eq!(json["paymentId"], 1);
        assert_eq!(json["paymentStatus"], "COMPLETED");
        assert!(json["order"].is_null());
    }

    #[test]
    fn composes_with_resolved_order_view() {
        let payment = Payment {
            payment_id: 1,
            order_id: 10,
            is_payed: true,
            payment_status: PaymentStatus::Completed,
        };
        let order = OrderView {
            order_id: 10,
            order_date: None,
            order_desc: Some("Order 10".to_string()),
            order_fee: Some(100.0),
        };
        let json = serde_json::to_value(PaymentResponse::compose(payment, Some(order))).unwrap();
        assert_eq!(json["order"]["orderId"], 10);
    }
}
