pub mod health;
pub mod users;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: liveness, health, users and the OpenAPI document.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Public routes (liveness, health, API document)
    let public = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // Users resource; `:id` is parsed as u64 by the handler
    let api = Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/:id", get(users::get_user));

    // Compose; state is attached once for both groups
    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                // request arrival
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // response with status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
