//! Restaurant list, detail, and delete handlers.

use crate::error::AppError;
use crate::response::{no_content, success_many, success_one_ok};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// Ids that do not parse as integers cannot match a row, so they are reported as not found.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::restaurant_not_found())
}

/// GET /restaurants
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let restaurants = CrudService::list_restaurants(&state.pool).await?;
    Ok(success_many(restaurants))
}

/// GET /restaurants/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let restaurant = CrudService::read_restaurant(&state.pool, id)
        .await?
        .ok_or_else(AppError::restaurant_not_found)?;
    Ok(success_one_ok(restaurant))
}

/// DELETE /restaurants/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    CrudService::delete_restaurant(&state.pool, id).await?;
    Ok(no_content())
}
