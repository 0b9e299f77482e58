//! Reports (Catalog) Backend Module
//!
//! Serves the report catalog: reports, categories and organizations, plus
//! the derived statistics feeds.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits, pure aggregation functions
//! - `infra/` - Database implementations (SQLite, PostgreSQL)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Notes
//! - Statistics are recomputed per request from the full report collection;
//!   nothing derived is persisted
//! - Stat ordering uses genuine Korean collation (label sets are Korean)
//! - Category and organization names are unique; duplicates surface as 409

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogStore;
pub use infra::sqlite::SqliteCatalogStore;
pub use presentation::handlers::CatalogStore;
pub use presentation::router::catalog_router_generic;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::stats::{MonthlyStatEntry, StatEntry};
    pub use crate::presentation::dto::*;
}
