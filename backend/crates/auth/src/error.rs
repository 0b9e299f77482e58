//! Auth Error Types
//!
//! Auth-specific error variants. Each variant renders the exact JSON shape
//! and status code the frontend expects; internal detail stays in the log.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login request without username or password
    #[error("Username and password are required")]
    MissingCredentials,

    /// Unknown user or wrong password (indistinguishable on purpose)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No session, or session role is not admin
    #[error("Admin privileges required")]
    AdminRequired,

    /// Change-password request without both fields
    #[error("Current and new password are required")]
    MissingPasswordFields,

    /// New password below the minimum length
    #[error("New password is too short")]
    PasswordTooShort,

    /// Session refers to a user that no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Current password did not verify
    #[error("Current password is incorrect")]
    WrongCurrentPassword,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials
            | AuthError::MissingPasswordFields
            | AuthError::PasswordTooShort => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::AdminRequired
            | AuthError::WrongCurrentPassword => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::MissingPasswordFields
            | AuthError::PasswordTooShort => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::AdminRequired
            | AuthError::WrongCurrentPassword => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Localized message shown to the caller
    fn user_message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "Username and password are required",
            AuthError::InvalidCredentials => "Invalid credentials",
            AuthError::AdminRequired => "관리자 권한이 필요합니다.",
            AuthError::MissingPasswordFields => "현재 비밀번호와 새 비밀번호가 필요합니다.",
            AuthError::PasswordTooShort => "새 비밀번호는 최소 8자 이상이어야 합니다.",
            AuthError::UserNotFound => "사용자를 찾을 수 없습니다.",
            AuthError::WrongCurrentPassword => "현재 비밀번호가 올바르지 않습니다.",
            AuthError::Database(_) | AuthError::Internal(_) => "Internal server error",
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::WrongCurrentPassword => {
                tracing::warn!("Password change with wrong current password");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = json!({ "success": false, "error": self.user_message() });

        (status, Json(body)).into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::MissingCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::AdminRequired.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::UserNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AuthError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_never_leaks() {
        let err = AuthError::Internal("connection string with secrets".into());
        assert_eq!(err.user_message(), "Internal server error");
    }
}
