//! Extract a JSON object body, rejecting with the service's validation error shape.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

/// Request body that must be a JSON object.
#[derive(Clone, Debug)]
pub struct JsonObject(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
                _ => AppError::validation(rejection.body_text()),
            })?;
        match value {
            Value::Object(map) => Ok(JsonObject(map)),
            _ => Err(AppError::validation("body must be a JSON object")),
        }
    }
}
