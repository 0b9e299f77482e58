//! Catalog Statistics
//!
//! Pure aggregation over an in-memory report collection: group-by-label
//! counting, ordering, and the recent-N projection. Nothing here touches
//! the store or persists anything.

use std::collections::{BTreeMap, HashMap};

use icu::collator::{Collator, CollatorOptions, Strength};
use icu::locid::locale;
use serde::Serialize;

use crate::domain::entity::{Report, ReportSummary};

/// Group label substituted for reports without a category.
pub const FALLBACK_CATEGORY: &str = "미분류";

/// Group label substituted for reports without an organization.
pub const FALLBACK_ORGANIZATION: &str = "기타";

/// Number of entries returned by the recent-reports feed.
pub const RECENT_LIMIT: usize = 6;

/// One `{name, count}` aggregation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub name: String,
    pub count: usize,
}

/// One calendar-month aggregation entry, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyStatEntry {
    pub year: i32,
    pub month: u32,
    pub name: String,
    pub count: usize,
}

/// Which report field to group on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Category,
    Organization,
}

impl StatField {
    /// Grouping label for one report, with the field's fallback for
    /// empty/absent values.
    fn label(&self, report: &Report) -> String {
        let (value, fallback) = match self {
            StatField::Category => (report.category.as_deref(), FALLBACK_CATEGORY),
            StatField::Organization => (report.organization.as_deref(), FALLBACK_ORGANIZATION),
        };

        match value {
            Some(v) if !v.trim().is_empty() => v.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Collator for `ko` with default (tertiary) strength. The label sets are
/// Korean, so tie-breaks must follow real collation rules, not byte order.
fn korean_collator() -> Collator {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);

    Collator::try_new(&locale!("ko").into(), options)
        .expect("Korean collation data is compiled into the binary")
}

/// Count reports per distinct label of `field`.
///
/// Result is ordered by count descending; equal counts are ordered by
/// name ascending under Korean collation.
pub fn grouped_counts(reports: &[Report], field: StatField) -> Vec<StatEntry> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for report in reports {
        *counts.entry(field.label(report)).or_insert(0) += 1;
    }

    let collator = korean_collator();
    let mut entries: Vec<StatEntry> = counts
        .into_iter()
        .map(|(name, count)| StatEntry { name, count })
        .collect();

    entries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| collator.compare(&a.name, &b.name))
    });

    entries
}

/// Count reports per calendar month, newest month first. Reports without
/// a parseable date are skipped.
pub fn monthly_counts(reports: &[Report]) -> Vec<MonthlyStatEntry> {
    use chrono::Datelike;

    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for report in reports {
        if let Some(date) = report.parsed_date() {
            *counts.entry((date.year(), date.month())).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .rev()
        .map(|((year, month), count)| MonthlyStatEntry {
            year,
            month,
            name: format!("{year}년 {month}월"),
            count,
        })
        .collect()
}

/// Project the collection onto content-free summaries, newest date first,
/// truncated to [`RECENT_LIMIT`]. Undated reports sort last.
pub fn recent_reports(reports: Vec<Report>) -> Vec<ReportSummary> {
    let mut summaries: Vec<ReportSummary> =
        reports.into_iter().map(ReportSummary::from).collect();

    summaries.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
    summaries.truncate(RECENT_LIMIT);

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: i64, date: Option<&str>, category: Option<&str>, org: Option<&str>) -> Report {
        Report {
            id,
            title: format!("report {id}"),
            date: date.map(Into::into),
            summary: None,
            category: category.map(Into::into),
            organization: org.map(Into::into),
            tags: Vec::new(),
            download_url: None,
            conference_id: None,
            content: Some("본문".into()),
        }
    }

    #[test]
    fn test_category_counts_example() {
        let reports = vec![
            report(1, None, Some("AI"), None),
            report(2, None, Some("AI"), None),
            report(3, None, Some("IoT"), None),
        ];

        let stats = grouped_counts(&reports, StatField::Category);
        assert_eq!(
            stats,
            vec![
                StatEntry { name: "AI".into(), count: 2 },
                StatEntry { name: "IoT".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_fallback_labels() {
        let reports = vec![
            report(1, None, None, None),
            report(2, None, Some(""), Some("  ")),
        ];

        let by_category = grouped_counts(&reports, StatField::Category);
        assert_eq!(by_category, vec![StatEntry { name: "미분류".into(), count: 2 }]);

        let by_org = grouped_counts(&reports, StatField::Organization);
        assert_eq!(by_org, vec![StatEntry { name: "기타".into(), count: 2 }]);
    }

    #[test]
    fn test_counts_sum_to_report_total() {
        let reports = vec![
            report(1, None, Some("AI"), None),
            report(2, None, None, None),
            report(3, None, Some("IoT"), None),
            report(4, None, Some("AI"), None),
        ];

        let stats = grouped_counts(&reports, StatField::Category);
        let sum: usize = stats.iter().map(|s| s.count).sum();
        assert_eq!(sum, reports.len());
    }

    #[test]
    fn test_tie_break_uses_korean_collation() {
        let reports = vec![
            report(1, None, Some("통신"), None),
            report(2, None, Some("가상현실"), None),
            report(3, None, Some("메타버스"), None),
        ];

        let stats = grouped_counts(&reports, StatField::Category);
        // All counts equal, so names must come back in Korean order:
        // 가상현실 < 메타버스 < 통신.
        let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["가상현실", "메타버스", "통신"]);
    }

    #[test]
    fn test_count_order_dominates_name_order() {
        let reports = vec![
            report(1, None, Some("통신"), None),
            report(2, None, Some("통신"), None),
            report(3, None, Some("가상현실"), None),
        ];

        let stats = grouped_counts(&reports, StatField::Category);
        assert_eq!(stats[0].name, "통신");
        assert_eq!(stats[1].name, "가상현실");
    }

    #[test]
    fn test_recent_truncates_and_sorts() {
        let reports: Vec<Report> = (1..=8)
            .map(|i| report(i, Some(&format!("2025-01-{:02}", i)), None, None))
            .collect();

        let recent = recent_reports(reports);
        assert_eq!(recent.len(), RECENT_LIMIT);
        assert_eq!(recent[0].id, 8);
        assert_eq!(recent[5].id, 3);
    }

    #[test]
    fn test_recent_smaller_collection_returns_all() {
        let reports = vec![
            report(1, Some("2025-03-01"), None, None),
            report(2, Some("2025-03-02"), None, None),
        ];

        let recent = recent_reports(reports);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, 2);
    }

    #[test]
    fn test_recent_undated_sort_last() {
        let reports = vec![
            report(1, None, None, None),
            report(2, Some("2025-03-02"), None, None),
        ];

        let recent = recent_reports(reports);
        assert_eq!(recent[0].id, 2);
        assert_eq!(recent[1].id, 1);
    }

    #[test]
    fn test_monthly_counts_newest_first() {
        let reports = vec![
            report(1, Some("2025-07-15"), None, None),
            report(2, Some("2025-07-01"), None, None),
            report(3, Some("2024-12-31"), None, None),
            report(4, Some("invalid"), None, None),
            report(5, None, None, None),
        ];

        let stats = monthly_counts(&reports);
        assert_eq!(
            stats,
            vec![
                MonthlyStatEntry { year: 2025, month: 7, name: "2025년 7월".into(), count: 2 },
                MonthlyStatEntry { year: 2024, month: 12, name: "2024년 12월".into(), count: 1 },
            ]
        );
    }
}
