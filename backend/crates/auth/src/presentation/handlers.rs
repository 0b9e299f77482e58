//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse, LogoutResponse, SessionResponse};
use crate::presentation::gate;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (username, password) = match (req.username, req.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(AuthError::MissingCredentials),
    };

    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(SignInInput { username, password }).await?;

    let cookie = state.config.cookie_config().build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            user: output.user,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Tokens are stateless; logout just tells the browser to drop the cookie.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie_config().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse {
            success: true,
            message: "Logged out successfully",
        }),
    )
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/session
pub async fn session<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let session = gate::resolve_session(&headers, &state.config);

    Json(SessionResponse { session })
}
