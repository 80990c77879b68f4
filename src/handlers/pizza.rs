use crate::error::AppError;
use crate::response::success_many;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /pizzas
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pizzas = CrudService::list_pizzas(&state.pool).await?;
    Ok(success_many(pizzas))
}
