use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON extractor that runs payload validation after deserialization.
///
/// Structural problems (missing fields, wrong types, malformed timestamps)
/// reject as `BadRequest`; rule violations reject as `ValidationErrors`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    struct TestPayload {
        #[validate(range(min = 1, message = "orderId must be a positive identifier"))]
        order_id: i32,
        #[validate(length(min = 1, message = "desc must not be empty"))]
        desc: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_a_valid_payload() {
        let request = json_request(r#"{"orderId":7,"desc":"ok"}"#);
        let ValidatedJson(payload) = ValidatedJson::<TestPayload>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(payload.order_id, 7);
    }

    #[tokio::test]
    async fn missing_field_rejects_as_bad_request() {
        let request = json_request(r#"{"desc":"ok"}"#);
        let error = ValidatedJson::<TestPayload>::from_request(request, &())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn rule_violation_rejects_with_field_errors() {
        let request = json_request(r#"{"orderId":0,"desc":""}"#);
        let error = ValidatedJson::<TestPayload>::from_request(request, &())
            .await
            .unwrap_err();
        match error {
            AppError::ValidationErrors { errors } => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert!(fields.contains(&"order_id"));
                assert!(fields.contains(&"desc"));
            }
            other => panic!("expected ValidationErrors, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_content_type_rejects_as_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"orderId":7,"desc":"ok"}"#))
            .unwrap();
        let error = ValidatedJson::<TestPayload>::from_request(request, &())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::BadRequest { .. }));
    }
}
