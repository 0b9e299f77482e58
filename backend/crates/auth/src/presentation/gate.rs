//! Auth Gate
//!
//! Resolves the session identity from an incoming request. Routes that
//! need auth call this at the top of the handler and pass the resolved
//! identity down explicitly.

use axum::http::{HeaderMap, header};

use crate::application::config::AuthConfig;
use crate::application::token::verify_token;
use crate::domain::user::Session;
use crate::error::{AuthError, AuthResult};

/// Pull the raw token from the request: `Authorization: Bearer` first,
/// session cookie as fallback.
fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(auth) = headers.get(header::AUTHORIZATION)
        && let Ok(value) = auth.to_str()
        && let Some(bearer) = value.strip_prefix("Bearer ")
    {
        return Some(bearer.to_string());
    }

    platform::cookie::extract_cookie(headers, cookie_name)
}

/// Resolve the session carried by a request, if any.
///
/// Absent, malformed, tampered and expired tokens all resolve to `None`;
/// callers cannot distinguish the cases.
pub fn resolve_session(headers: &HeaderMap, config: &AuthConfig) -> Option<Session> {
    let token = extract_token(headers, &config.cookie_name)?;
    let user = verify_token(&token, &config.secret)?;

    Some(Session::new(user, config.token_ttl_secs()))
}

/// Resolve the session and require the admin role.
pub fn require_admin(headers: &HeaderMap, config: &AuthConfig) -> AuthResult<Session> {
    match resolve_session(headers, config) {
        Some(session) if session.user.role.is_admin() => Ok(session),
        _ => Err(AuthError::AdminRequired),
    }
}
