use std::time::Instant;

use service::users::UserService;

/// Shared state handed to every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(users: UserService) -> Self {
        Self { users, started_at: Instant::now() }
    }

    /// Seconds since the state was built.
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
