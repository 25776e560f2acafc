use axum::Router;
use configs::AppConfig;
use service::users::UserService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build application state from config: one store for the whole process.
pub fn build_state(cfg: &AppConfig) -> AppState {
    let users = UserService::in_memory(cfg.users.seed_demo_data);
    AppState::new(users)
}

/// Build the router with its state and middleware.
pub fn build_app(cfg: &AppConfig) -> Router {
    routes::build_router(build_state(cfg), build_cors())
}

/// Bind the configured address.
pub async fn bind(cfg: &AppConfig) -> Result<TcpListener, StartupError> {
    let addr = cfg.server.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(mut cfg: AppConfig) -> Result<(), StartupError> {
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    // One store for the whole process, shared through the router state
    let app = build_app(&cfg);
    let listener = bind(&cfg).await?;
    let addr = listener.local_addr().map_err(anyhow::Error::from)?;
    info!(%addr, seed_demo_data = cfg.users.seed_demo_data, "starting users api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
