use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::response::success_one;
use crate::service::{CrudService, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// POST /restaurant_pizzas
pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::restaurant_pizza(&body)?;
    let created = CrudService::create_restaurant_pizza(&state.pool, new).await?;
    Ok(success_one(created))
}
