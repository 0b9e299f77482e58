//! Admin Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Env-check failure. This route answers with the bare `{ "message": ... }`
/// envelope, unlike the rest of the admin surface.
#[derive(Debug, Error)]
pub enum EnvCheckError {
    /// No session, or session role is not admin
    #[error("Admin privileges required")]
    AdminRequired,
}

impl EnvCheckError {
    fn status_code(&self) -> StatusCode {
        match self {
            EnvCheckError::AdminRequired => StatusCode::UNAUTHORIZED,
        }
    }

    fn user_message(&self) -> &'static str {
        match self {
            EnvCheckError::AdminRequired => "관리자 권한이 필요합니다.",
        }
    }
}

impl IntoResponse for EnvCheckError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Env check denied");
        let body = json!({ "message": self.user_message() });

        (self.status_code(), Json(body)).into_response()
    }
}
