//! Catalog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::presentation::handlers::{self, CatalogAppState, CatalogStore};

/// Create the catalog router for any store implementation. Mounted under
/// `/api` by the binary.
pub fn catalog_router_generic<S: CatalogStore>(store: Arc<S>) -> Router {
    let state = CatalogAppState { store };

    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories::<S>).post(handlers::create_category::<S>),
        )
        .route(
            "/organizations",
            get(handlers::list_organizations::<S>).post(handlers::create_organization::<S>),
        )
        .route("/reports", get(handlers::list_reports::<S>))
        .route("/reports/recent", get(handlers::recent_reports::<S>))
        .route("/reports/stats/categories", get(handlers::category_stats::<S>))
        .route(
            "/reports/stats/organizations",
            get(handlers::organization_stats::<S>),
        )
        .route("/reports/stats/monthly", get(handlers::monthly_stats::<S>))
        .with_state(state)
}
