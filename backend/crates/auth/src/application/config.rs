//! Application Configuration

use std::time::Duration;

use platform::cookie::{CookieConfig, SameSite};

/// Fallback used when no SESSION_SECRET is configured. Tokens signed with
/// it are worthless the moment a real secret is set.
const DEFAULT_SECRET: &str = "default-secret-change-in-production";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub cookie_name: String,
    /// HMAC signing key for session tokens
    pub secret: Vec<u8>,
    /// Token validity window (7 days)
    pub token_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "auth-token".to_string(),
            secret: DEFAULT_SECRET.as_bytes().to_vec(),
            token_ttl: Duration::from_secs(7 * 24 * 3600),
            cookie_secure: true,
        }
    }
}

impl AuthConfig {
    /// Build from the process environment (`SESSION_SECRET`).
    pub fn from_env() -> Self {
        let secret = match std::env::var("SESSION_SECRET") {
            Ok(s) if !s.is_empty() => s.into_bytes(),
            _ => {
                tracing::warn!(
                    "SESSION_SECRET not set, using the built-in development secret"
                );
                DEFAULT_SECRET.as_bytes().to_vec()
            }
        };

        Self {
            secret,
            ..Default::default()
        }
    }

    /// Config for local development (insecure cookie over plain HTTP).
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Token TTL in whole seconds.
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Cookie settings matching the token validity window.
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl_secs()),
        }
    }
}
