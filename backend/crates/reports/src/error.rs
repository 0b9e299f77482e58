//! Catalog Error Types
//!
//! Two response envelopes coexist in this crate, inherited from the
//! frontend contract: the category/organization CRUD routes answer with
//! `{ "message": ... }`, the report feed routes with
//! `{ "success": false, "error": ... }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

/// Catalog result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Which catalog entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Report,
    Category,
    Organization,
}

impl Entity {
    /// Capitalized singular, as used in messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Entity::Report => "Report",
            Entity::Category => "Category",
            Entity::Organization => "Organization",
        }
    }

    /// Lowercase plural, as used in fetch-failure messages.
    pub const fn plural(&self) -> &'static str {
        match self {
            Entity::Report => "reports",
            Entity::Category => "categories",
            Entity::Organization => "organizations",
        }
    }
}

/// Store operation, for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Fetch,
    Create,
}

/// Errors from the CRUD side of the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Creation request without a name
    #[error("{} name is required", .0.as_str())]
    MissingName(Entity),

    /// Unique name constraint violated
    #[error("{} name already exists", .0.as_str())]
    DuplicateName(Entity),

    /// Underlying store failure
    #[error("store {op:?} failed for {}", entity.plural())]
    Store {
        entity: Entity,
        op: StoreOp,
        source: sqlx::Error,
    },
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::MissingName(_) => StatusCode::BAD_REQUEST,
            CatalogError::DuplicateName(_) => StatusCode::CONFLICT,
            CatalogError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::MissingName(_) => ErrorKind::BadRequest,
            CatalogError::DuplicateName(_) => ErrorKind::Conflict,
            CatalogError::Store { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.user_message())
    }

    /// Message shown to the caller.
    fn user_message(&self) -> String {
        match self {
            CatalogError::MissingName(entity) => format!("{} name is required", entity.as_str()),
            CatalogError::DuplicateName(entity) => {
                format!("{} name already exists", entity.as_str())
            }
            CatalogError::Store {
                entity,
                op: StoreOp::Fetch,
                ..
            } => format!("Failed to fetch {}", entity.plural()),
            CatalogError::Store {
                entity,
                op: StoreOp::Create,
                ..
            } => format!("Failed to create {}", entity.as_str().to_lowercase()),
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Store { entity, op, source } => {
                tracing::error!(
                    entity = entity.plural(),
                    op = ?op,
                    error = %source,
                    "Catalog store error"
                );
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }

    /// Classify a creation failure: unique violations become 409, anything
    /// else stays a store error. Works for both SQLite and PostgreSQL.
    pub fn from_create(entity: Entity, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db)
                if db.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                CatalogError::DuplicateName(entity)
            }
            source => CatalogError::Store {
                entity,
                op: StoreOp::Create,
                source,
            },
        }
    }

    pub fn from_fetch(entity: Entity, source: sqlx::Error) -> Self {
        CatalogError::Store {
            entity,
            op: StoreOp::Fetch,
            source,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        // Renders as `{ "message": ... }` with the mapped status.
        self.to_app_error().into_response()
    }
}

/// Failure envelope for the report feed routes. Always a 500; the message
/// is fixed per endpoint and the cause only reaches the log.
#[derive(Debug)]
pub struct FeedError {
    message: &'static str,
}

impl FeedError {
    pub fn new(message: &'static str, cause: CatalogError) -> Self {
        tracing::error!(error = %cause, "{message}");
        Self { message }
    }
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        let body = json!({ "success": false, "error": self.message });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CatalogError::MissingName(Entity::Category).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::DuplicateName(Entity::Organization).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CatalogError::from_fetch(Entity::Report, sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            CatalogError::MissingName(Entity::Category).user_message(),
            "Category name is required"
        );
        assert_eq!(
            CatalogError::DuplicateName(Entity::Organization).user_message(),
            "Organization name already exists"
        );
        assert_eq!(
            CatalogError::from_fetch(Entity::Category, sqlx::Error::PoolClosed).user_message(),
            "Failed to fetch categories"
        );
        assert_eq!(
            CatalogError::from_create(Entity::Category, sqlx::Error::PoolClosed).user_message(),
            "Failed to create category"
        );
    }
}
