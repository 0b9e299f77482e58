//! Domain Entities

use chrono::NaiveDate;
use serde::Serialize;

/// A standards-watch report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub organization: Option<String>,
    pub tags: Vec<String>,
    pub download_url: Option<String>,
    pub conference_id: Option<i64>,
    /// Full body; excluded from every list view.
    pub content: Option<String>,
}

impl Report {
    /// Parse the `date` column (`YYYY-MM-DD`, possibly with a time suffix).
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_report_date(self.date.as_deref())
    }
}

/// A report without its `content`, as served by list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub id: i64,
    pub title: String,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub organization: Option<String>,
    pub tags: Vec<String>,
    pub download_url: Option<String>,
    pub conference_id: Option<i64>,
}

impl ReportSummary {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_report_date(self.date.as_deref())
    }
}

impl From<Report> for ReportSummary {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            title: report.title,
            date: report.date,
            summary: report.summary,
            category: report.category,
            organization: report.organization,
            tags: report.tags,
            download_url: report.download_url,
            conference_id: report.conference_id,
        }
    }
}

/// Report category. Names are unique.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Standards organization. Names are unique.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
}

/// Fields for category creation.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

/// Fields for organization creation.
#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub name: String,
}

/// Parse a report date string; `None` for empty or unparseable values.
pub fn parse_report_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            raw.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}
