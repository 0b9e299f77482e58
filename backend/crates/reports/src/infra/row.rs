//! Row types shared by the SQLite and PostgreSQL stores.

use crate::domain::entity::{Category, Organization, Report};

/// Raw report row. Tags are stored as a JSON array in a text column.
#[derive(sqlx::FromRow)]
pub(crate) struct ReportRow {
    pub id: i64,
    pub title: String,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub organization: Option<String>,
    pub tags: Option<String>,
    pub download_url: Option<String>,
    pub conference_id: Option<i64>,
    pub content: Option<String>,
}

impl ReportRow {
    pub fn into_report(self) -> Report {
        Report {
            id: self.id,
            title: self.title,
            date: self.date,
            summary: self.summary,
            category: self.category,
            organization: self.organization,
            tags: parse_tags(self.tags.as_deref()),
            download_url: self.download_url,
            conference_id: self.conference_id,
            content: self.content,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl CategoryRow {
    pub fn into_category(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct OrganizationRow {
    pub id: i64,
    pub name: String,
}

impl OrganizationRow {
    pub fn into_organization(self) -> Organization {
        Organization {
            id: self.id,
            name: self.name,
        }
    }
}

/// Decode the JSON tags column. Malformed or missing values become an
/// empty list rather than failing the whole fetch.
fn parse_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(text) if !text.is_empty() => serde_json::from_str(text).unwrap_or_default(),
        _ => Vec::new(),
    }
}
