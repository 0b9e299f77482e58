//! Admin Backend Module
//!
//! Admin-only operations behind the auth gate:
//! - Environment variable health check
//! - Password change for the signed-in admin

pub mod error;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::EnvCheckError;
pub use presentation::router::admin_router_generic;
