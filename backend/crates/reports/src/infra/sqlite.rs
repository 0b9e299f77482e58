//! SQLite Catalog Store (local development)

use sqlx::SqlitePool;

use crate::domain::entity::{Category, NewCategory, NewOrganization, Organization, Report};
use crate::domain::repository::{CategoryRepository, OrganizationRepository, ReportRepository};
use crate::error::{CatalogError, CatalogResult, Entity};
use crate::infra::row::{CategoryRow, OrganizationRow, ReportRow};

/// SQLite-backed catalog store covering reports, categories and
/// organizations.
#[derive(Clone)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the catalog tables and indexes if they do not exist yet.
    pub async fn ensure_schema(&self) -> CatalogResult<()> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                date TEXT,
                summary TEXT,
                category TEXT,
                organization TEXT,
                tags TEXT,
                download_url TEXT,
                conference_id INTEGER,
                content TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS organizations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
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

impl ReportRepository for SqliteCatalogStore {
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

impl CategoryRepository for SqliteCatalogStore {
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
        let result = sqlx::query("INSERT INTO categories (name, description) VALUES (?, ?)")
            .bind(&new.name)
            .bind(&new.description)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::from_create(Entity::Category, e))?;

        Ok(Category {
            id: result.last_insert_rowid(),
            name: new.name,
            description: new.description,
        })
    }
}

impl OrganizationRepository for SqliteCatalogStore {
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
        let result = sqlx::query("INSERT INTO organizations (name) VALUES (?)")
            .bind(&new.name)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::from_create(Entity::Organization, e))?;

        Ok(Organization {
            id: result.last_insert_rowid(),
            name: new.name,
        })
    }
}
