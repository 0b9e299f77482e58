//! PostgreSQL Catalog Store (production)

use sqlx::PgPool;

use crate::domain::entity::{Category, NewCategory, NewOrganization, Organization, Report};
use crate::domain::repository::{CategoryRepository, OrganizationRepository, ReportRepository};
use crate::error::{CatalogError, CatalogResult, Entity};
use crate::infra::row::{CategoryRow, OrganizationRow, ReportRow};

/// PostgreSQL-backed catalog store covering reports, categories and
/// organizations.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the catalog tables and indexes if they do not exist yet.
    pub async fn ensure_schema(&self) -> CatalogResult<()> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS reports (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                date TEXT,
                summary TEXT,
                category TEXT,
                organization TEXT,
                tags TEXT,
                download_url TEXT,
                conference_id BIGINT,
                content TEXT,
                created_at TIMESTAMPTZ DEFAULT now()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                description TEXT,
                created_at TIMESTAMPTZ DEFAULT now()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS organizations (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                created_at TIMESTAMPTZ DEFAULT now()
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_reports_category ON reports(category)",
            "CREATE INDEX IF NOT EXISTS idx_reports_organization ON reports(organization)",
            "CREATE INDEX IF NOT EXISTS idx_reports_date ON reports(date)",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| CatalogError::from_fetch(Entity::Report, e))?;
        }

        Ok(())
    }
}

impl ReportRepository for PgCatalogStore {
    async fn all_reports(&self) -> CatalogResult<Vec<Report>> {
        let rows = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT id, title, date, summary, category, organization,
                   tags, download_url, conference_id, content
            FROM reports
            ORDER BY date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::from_fetch(Entity::Report, e))?;

        Ok(rows.into_iter().map(ReportRow::into_report).collect())
    }
}

impl CategoryRepository for PgCatalogStore {
    async fn all_categories(&self) -> CatalogResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::from_fetch(Entity::Category, e))?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn create_category(&self, new: NewCategory) -> CatalogResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CatalogError::from_create(Entity::Category, e))?;

        Ok(row.into_category())
    }
}

impl OrganizationRepository for PgCatalogStore {
    async fn all_organizations(&self) -> CatalogResult<Vec<Organization>> {
        let rows =
            sqlx::query_as::<_, OrganizationRow>("SELECT id, name FROM organizations ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| CatalogError::from_fetch(Entity::Organization, e))?;

        Ok(rows
            .into_iter()
            .map(OrganizationRow::into_organization)
            .collect())
    }

    async fn create_organization(&self, new: NewOrganization) -> CatalogResult<Organization> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            "INSERT INTO organizations (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&new.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CatalogError::from_create(Entity::Organization, e))?;

        Ok(row.into_organization())
    }
}
