//! Common routes: index banner, liveness, readiness with a database ping, and build info.

use crate::handlers::index::index;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Shared by `/health` and `/ready`; `database` is only reported by readiness.
#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl StatusBody {
    const fn up(database: Option<&'static str>) -> Self {
        StatusBody { status: "ok", database }
    }
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

const VERSION: VersionBody = VersionBody {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn health() -> Json<StatusBody> {
    Json(StatusBody::up(None))
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, Json(StatusBody::up(Some("ok")))),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusBody {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

async fn version() -> Json<VersionBody> {
    Json(VERSION)
}

/// GET /, /health, /ready, /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
