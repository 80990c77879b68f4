//! Typed errors and HTTP mapping.

use crate::response::{error_body, errors_body};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message returned when a write fails for a reason other than a known validation rule.
pub const GENERIC_VALIDATION_ERROR: &str = "validation errors";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid address: {0}")]
    Address(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("validation: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }

    pub fn restaurant_not_found() -> Self {
        AppError::NotFound("Restaurant not found".into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(error_body(&message))).into_response()
            }
            AppError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, Json(errors_body(&messages))).into_response()
            }
            AppError::PayloadTooLarge(message) => {
                (StatusCode::PAYLOAD_TOO_LARGE, Json(errors_body(&[message]))).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_body("internal server error")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let res = AppError::restaurant_not_found().into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let res = AppError::validation("price must be between 1 and 30").into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn payload_too_large_maps_to_413() {
        let res = AppError::PayloadTooLarge("length limit exceeded".into()).into_response();
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn unexpected_db_error_maps_to_500() {
        let res = AppError::Db(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_display_joins_messages() {
        let e = AppError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(e.to_string(), "validation: a; b");
    }
}
