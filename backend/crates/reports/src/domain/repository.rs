//! Repository Traits
//!
//! Interfaces for catalog persistence. One implementation per backend in
//! the infrastructure layer; route handlers stay generic over these.

use crate::domain::entity::{Category, NewCategory, NewOrganization, Organization, Report};
use crate::error::CatalogResult;

/// Report repository trait. The catalog only reads reports; aggregation
/// happens in memory over the full collection.
#[trait_variant::make(ReportRepository: Send)]
pub trait LocalReportRepository {
    /// Fetch every report, newest first
    async fn all_reports(&self) -> CatalogResult<Vec<Report>>;
}

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// Fetch all categories ordered by name
    async fn all_categories(&self) -> CatalogResult<Vec<Category>>;

    /// Create a category; duplicate names fail with a conflict
    async fn create_category(&self, new: NewCategory) -> CatalogResult<Category>;
}

/// Organization repository trait
#[trait_variant::make(OrganizationRepository: Send)]
pub trait LocalOrganizationRepository {
    /// Fetch all organizations ordered by name
    async fn all_organizations(&self) -> CatalogResult<Vec<Organization>>;

    /// Create an organization; duplicate names fail with a conflict
    async fn create_organization(&self, new: NewOrganization) -> CatalogResult<Organization>;
}
