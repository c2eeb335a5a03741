//! Client-facing errors and their HTTP mapping.
//!
//! # Design
//! Every variant is answered with `400 Bad Request` and a `{"message": ...}`
//! body. A missing todo is reported as 400 rather than 404 to keep the
//! established wire contract; clients match on the message text.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::PrettyJson;

pub const NOT_FOUND_MESSAGE: &str = "todo not found";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// The `{id}` path segment is not an integer.
    #[error("invalid todo id: {0}")]
    InvalidId(String),

    /// The request body could not be decoded into a todo.
    #[error("invalid todo body: {0}")]
    InvalidBody(String),
}

/// The segment could not be extracted at all, e.g. it percent-decodes to
/// invalid UTF-8.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidId(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejecting request");
        let body = ErrorResponse {
            message: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, PrettyJson(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_matches_wire_contract() {
        assert_eq!(ApiError::NotFound.to_string(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn every_variant_maps_to_bad_request() {
        for err in [
            ApiError::NotFound,
            ApiError::InvalidId("abc".to_string()),
            ApiError::InvalidBody("EOF".to_string()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn invalid_id_echoes_raw_segment() {
        assert_eq!(
            ApiError::InvalidId("two".to_string()).to_string(),
            "invalid todo id: two"
        );
    }
}
