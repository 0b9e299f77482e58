//! Identity Types
//!
//! The session identity is a value parsed once per request and passed
//! explicitly; there is no process-wide "current user".

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User role carried in the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Parse the role column. Unknown values degrade to the least
    /// privileged role.
    pub fn from_code(code: &str) -> Self {
        match code {
            "admin" => UserRole::Admin,
            "user" => UserRole::User,
            other => {
                tracing::warn!(role = %other, "Unknown user role, treating as user");
                UserRole::User
            }
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Public identity embedded in session tokens and returned to the
/// frontend. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// A resolved session: identity plus the expiry shown to the client.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: SessionUser,
    /// RFC 3339 expiry timestamp
    pub expires: String,
}

impl Session {
    /// Build a session expiring `ttl_secs` from now.
    pub fn new(user: SessionUser, ttl_secs: i64) -> Self {
        let expires = (Utc::now() + chrono::Duration::seconds(ttl_secs))
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        Self { user, expires }
    }
}

/// Full user row as stored in the `users` table.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password_hash: String,
}

impl UserRecord {
    /// Project the row onto the public session identity.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}
