//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::domain::entity::{Category, NewCategory, NewOrganization, Organization};
use crate::domain::repository::{CategoryRepository, OrganizationRepository, ReportRepository};
use crate::domain::stats::{self, StatField};
use crate::error::{CatalogError, CatalogResult, Entity, FeedError};
use crate::presentation::dto::{
    CreateCategoryRequest, CreateOrganizationRequest, FeedResponse, ReportListResponse,
};

/// Shared state for catalog handlers. One store implements all three
/// repository traits.
#[derive(Clone)]
pub struct CatalogAppState<S>
where
    S: ReportRepository
        + CategoryRepository
        + OrganizationRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub store: Arc<S>,
}

/// Trait alias bound used by every handler in this module.
pub trait CatalogStore:
    ReportRepository + CategoryRepository + OrganizationRepository + Clone + Send + Sync + 'static
{
}

impl<S> CatalogStore for S where
    S: ReportRepository
        + CategoryRepository
        + OrganizationRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}

// ============================================================================
// Categories
// ============================================================================

/// GET /api/categories
pub async fn list_categories<S: CatalogStore>(
    State(state): State<CatalogAppState<S>>,
) -> CatalogResult<Json<Vec<Category>>> {
    let categories = state.store.all_categories().await?;

    Ok(Json(categories))
}

/// POST /api/categories
pub async fn create_category<S: CatalogStore>(
    State(state): State<CatalogAppState<S>>,
    Json(req): Json<CreateCategoryRequest>,
) -> CatalogResult<impl IntoResponse> {
    let name = match req.name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(CatalogError::MissingName(Entity::Category)),
    };

    let category = state
        .store
        .create_category(NewCategory {
            name,
            description: req.description,
        })
        .await?;

    tracing::info!(category = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

// ============================================================================
// Organizations
// ============================================================================

/// GET /api/organizations
pub async fn list_organizations<S: CatalogStore>(
    State(state): State<CatalogAppState<S>>,
) -> CatalogResult<Json<Vec<Organization>>> {
    let organizations = state.store.all_organizations().await?;

    Ok(Json(organizations))
}

/// POST /api/organizations
pub async fn create_organization<S: CatalogStore>(
    State(state): State<CatalogAppState<S>>,
    Json(req): Json<CreateOrganizationRequest>,
) -> CatalogResult<impl IntoResponse> {
    let name = match req.name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(CatalogError::MissingName(Entity::Organization)),
    };

    let organization = state
        .store
        .create_organization(NewOrganization { name })
        .await?;

    tracing::info!(organization = %organization.name, "Organization created");

    Ok((StatusCode::CREATED, Json(organization)))
}

// ============================================================================
// Report Feeds
// ============================================================================

/// GET /api/reports
pub async fn list_reports<S: CatalogStore>(
    State(state): State<CatalogAppState<S>>,
) -> Result<impl IntoResponse, FeedError> {
    let reports = state
        .store
        .all_reports()
        .await
        .map_err(|e| FeedError::new("Failed to get reports", e))?;

    Ok(Json(ReportListResponse {
        success: true,
        data: reports,
    }))
}

/// GET /api/reports/recent
pub async fn recent_reports<S: CatalogStore>(
    State(state): State<CatalogAppState<S>>,
) -> Result<impl IntoResponse, FeedError> {
    let reports = state
        .store
        .all_reports()
        .await
        .map_err(|e| FeedError::new("Failed to get recent reports", e))?;

    Ok(Json(FeedResponse::new(stats::recent_reports(reports))))
}

/// GET /api/reports/stats/categories
pub async fn category_stats<S: CatalogStore>(
    State(state): State<CatalogAppState<S>>,
) -> Result<impl IntoResponse, FeedError> {
    let reports = state
        .store
        .all_reports()
        .await
        .map_err(|e| FeedError::new("Failed to get category stats", e))?;

    Ok(Json(FeedResponse::new(stats::grouped_counts(
        &reports,
        StatField::Category,
    ))))
}

/// GET /api/reports/stats/organizations
pub async fn organization_stats<S: CatalogStore>(
    State(state): State<CatalogAppState<S>>,
) -> Result<impl IntoResponse, FeedError> {
    let reports = state
        .store
        .all_reports()
        .await
        .map_err(|e| FeedError::new("Failed to get organization stats", e))?;

    Ok(Json(FeedResponse::new(stats::grouped_counts(
        &reports,
        StatField::Organization,
    ))))
}

/// GET /api/reports/stats/monthly
pub async fn monthly_stats<S: CatalogStore>(
    State(state): State<CatalogAppState<S>>,
) -> Result<impl IntoResponse, FeedError> {
    let reports = state
        .store
        .all_reports()
        .await
        .map_err(|e| FeedError::new("Failed to get monthly stats", e))?;

    Ok(Json(FeedResponse::new(stats::monthly_counts(&reports))))
}
