use axum::{extract::State, Json};
use common::types::Health;

use crate::state::AppState;

pub const ROOT_MESSAGE: &str = "Users API is running";

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Liveness message", body = String, content_type = "text/plain")))]
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health::new(state.uptime_secs()))
}
