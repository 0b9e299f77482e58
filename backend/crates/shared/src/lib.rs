//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest common vocabulary of the backend:
//! - Unified error type and result alias
//! - Error-kind to HTTP status mapping
//!
//! **Design Principle**: only things that are "hard to change" and mean the
//! same thing in every domain crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
