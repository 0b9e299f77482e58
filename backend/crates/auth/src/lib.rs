//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity types, repository traits
//! - `application/` - Use cases, token codec, configuration
//! - `infra/` - Database implementations (SQLite, PostgreSQL)
//! - `presentation/` - HTTP handlers, DTOs, router, auth gate
//!
//! ## Features
//! - Username + password login against the `users` table
//! - Stateless HMAC-SHA256 signed session tokens in an HttpOnly cookie
//! - Role-based access (admin, user)
//! - Password change for the signed-in admin
//!
//! ## Security Model
//! - Tokens are signed server-side; tampered or expired tokens resolve to
//!   "no session", never to an error
//! - Password digests use the legacy fixed-salt scheme in
//!   `platform::password` (kept for hash compatibility; weakness flagged
//!   there)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserStore;
pub use infra::sqlite::SqliteUserStore;
pub use presentation::router::auth_router_generic;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::user::*;
    pub use crate::presentation::dto::*;
}

pub mod gate {
    pub use crate::presentation::gate::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
