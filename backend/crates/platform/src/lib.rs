//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the backend:
//! - Cryptographic utilities (SHA-256, hex, constant-time compare)
//! - Password hashing (legacy fixed-salt scheme, see `password`)
//! - Cookie building and parsing
//! - Environment variable health reporting

pub mod cookie;
pub mod crypto;
pub mod env_report;
pub mod password;
