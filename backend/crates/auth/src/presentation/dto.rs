//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::user::{Session, SessionUser};

// ============================================================================
// Login
// ============================================================================

/// Login request. Fields are optional so a missing one yields the
/// contract's 400 instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: SessionUser,
}

// ============================================================================
// Session / Logout
// ============================================================================

/// Session status response; `session` is null when unauthenticated.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session: Option<Session>,
}

/// Logout response
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: &'static str,
}

// ============================================================================
// Change Password
// ============================================================================

/// Change password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Generic success envelope
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: &'static str,
}
