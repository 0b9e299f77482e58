//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use std::sync::Arc;

use auth::application::{ChangePasswordInput, ChangePasswordUseCase};
use auth::domain::repository::UserRepository;
use auth::models::{ChangePasswordRequest, SuccessResponse};
use auth::{AuthConfig, AuthError, AuthResult, gate};
use platform::env_report::{self, EnvReport};

use crate::error::EnvCheckError;

/// Shared state for admin handlers
#[derive(Clone)]
pub struct AdminAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Environment Health Check
// ============================================================================

/// GET /api/admin/env-check
///
/// Reports presence of required configuration keys. Secret values are
/// masked before they reach the response; an unauthenticated caller gets
/// a 401 with no variable data at all.
pub async fn env_check<R>(
    State(state): State<AdminAppState<R>>,
    headers: HeaderMap,
) -> Result<Json<EnvReport>, EnvCheckError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    gate::require_admin(&headers, &state.config).map_err(|_| EnvCheckError::AdminRequired)?;

    Ok(Json(env_report::check_process_env()))
}

// ============================================================================
// Change Password
// ============================================================================

/// POST /api/admin/change-password
pub async fn change_password<R>(
    State(state): State<AdminAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<Json<SuccessResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let session = gate::require_admin(&headers, &state.config)?;

    let (current_password, new_password) = match (req.current_password, req.new_password) {
        (Some(c), Some(n)) if !c.is_empty() && !n.is_empty() => (c, n),
        _ => return Err(AuthError::MissingPasswordFields),
    };

    let use_case = ChangePasswordUseCase::new(state.repo.clone());
    use_case
        .execute(ChangePasswordInput {
            user_id: session.user.id,
            current_password,
            new_password,
        })
        .await?;

    Ok(Json(SuccessResponse {
        success: true,
        message: "비밀번호가 성공적으로 변경되었습니다.",
    }))
}
