use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::trail_store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    TrailNotFound,
    InvalidTrail(String),
    MalformedBody(StatusCode, String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidTrail(reason) => ApiError::InvalidTrail(reason),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::TrailNotFound => (StatusCode::NOT_FOUND, "Trail not found".to_string()),
            ApiError::InvalidTrail(reason) => (StatusCode::UNPROCESSABLE_ENTITY, reason),
            ApiError::MalformedBody(status, reason) => (status, reason),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
