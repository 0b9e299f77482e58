//! Admin Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;

use crate::presentation::handlers::{self, AdminAppState};

/// Create the admin router for any repository implementation. Mounted
/// under `/api/admin` by the binary.
pub fn admin_router_generic<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AdminAppState { repo, config };

    Router::new()
        .route("/env-check", get(handlers::env_check::<R>))
        .route("/change-password", post(handlers::change_password::<R>))
        .with_state(state)
}
