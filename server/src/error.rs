//! HTTP error responses.
//!
//! Every failure leaves the server as `{"code": <status>, "message": <text>}`
//! with one of two fixed messages. Every body decoding failure (empty body,
//! bad syntax, wrong field types) collapses into `BadRequest`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::StoreError;
use utoipa::ToSchema;

/// Wire form of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = 404)]
    pub code: u16,
    #[schema(example = "Todo not found")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad Request")]
    BadRequest,
    #[error("Todo not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.status().as_u16(),
            message: self.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!(reason = %err, "rejected request body");
        ApiError::BadRequest
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_body() {
        let json = serde_json::to_value(ApiError::BadRequest.body()).unwrap();
        assert_eq!(json, serde_json::json!({"code": 400, "message": "Bad Request"}));
    }

    #[test]
    fn not_found_body() {
        let json = serde_json::to_value(ApiError::NotFound.body()).unwrap();
        assert_eq!(json, serde_json::json!({"code": 404, "message": "Todo not found"}));
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::NotFound(3));
        assert_eq!(err, ApiError::NotFound);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn decode_error_maps_to_400() {
        let err = serde_json::from_str::<bool>("nope").unwrap_err();
        assert_eq!(ApiError::from(err), ApiError::BadRequest);
    }
}
