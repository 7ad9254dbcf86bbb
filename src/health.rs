use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    cache: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = if state.cache.is_healthy() {
        "connected"
    } else {
        "unavailable"
    };
    Json(HealthResponse {
        status: "ok".to_string(),
        cache: cache.to_string(),
    })
}
