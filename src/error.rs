//! Error types and their JSON response mapping.
//!
//! All failures happen at the request boundary: either the body cannot be
//! deserialized, or the deserialized payload fails domain validation. The
//! analysis itself has no error path.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::analysis::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

/// JSON body of an error response: `{"detail": {"field": ..., "message": ...}}`.
///
/// `field` names the request field that caused the rejection and is omitted
/// when the failure is not attributable to a single field (e.g. malformed
/// JSON).
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, field, message) = match &self {
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Some(err.field()),
                err.to_string(),
            ),
            // Missing or wrongly-typed fields are data errors (422); syntactically
            // broken JSON is a bad request (400). The rejection already knows.
            AppError::InvalidBody(rejection) => {
                (rejection.status(), None, rejection.body_text())
            }
        };

        tracing::debug!(status = status.as_u16(), %message, "Request rejected");

        (status, Json(ErrorBody {
            detail: ErrorDetail { field, message },
        }))
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_maps_to_unprocessable_entity() {
        let response = AppError::from(ValidationError::EmptyText).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn error_body_names_the_violated_field() {
        let body = ErrorBody {
            detail: ErrorDetail {
                field: Some("text"),
                message: "text must not be empty".to_string(),
            },
        };
        let value = serde_json::to_value(&body).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "detail": {"field": "text", "message": "text must not be empty"}
            })
        );
    }

    #[test]
    fn error_body_omits_field_when_not_attributable() {
        let body = ErrorBody {
            detail: ErrorDetail {
                field: None,
                message: "malformed body".to_string(),
            },
        };
        let value = serde_json::to_value(&body).expect("serialize");
        assert!(value["detail"].get("field").is_none());
    }
}
