//! Aggregate statistics over the record set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::project::Project;

/// Counts grouped by category, status, and engagement, plus the
/// open-source split. Computed over the full catalog, independent of any
/// live filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogStats {
    pub total: usize,
    /// Category value -> record count (exact string match grouping).
    pub by_category: BTreeMap<String, usize>,
    /// Status wire form -> record count.
    pub by_status: BTreeMap<String, usize>,
    /// Engagement level -> record count.
    pub by_engagement: BTreeMap<String, usize>,
    pub open_source_count: usize,
    pub closed_source_count: usize,
    /// Rounded percentage; 0 for an empty catalog, never NaN.
    pub open_source_percent: u32,
}

impl CatalogStats {
    pub fn compute(projects: &[Project]) -> Self {
        let total = projects.len();
        let mut by_category = BTreeMap::new();
        let mut by_status = BTreeMap::new();
        let mut by_engagement = BTreeMap::new();
        let mut open_source_count = 0;

        for project in projects {
            *by_category.entry(project.category.clone()).or_insert(0) += 1;
            *by_status
                .entry(project.status.as_str().to_string())
                .or_insert(0) += 1;
            *by_engagement
                .entry(project.popularity.engagement_level.as_str().to_string())
                .or_insert(0) += 1;
            if project.open_source {
                open_source_count += 1;
            }
        }

        let open_source_percent = if total == 0 {
            0
        } else {
            ((open_source_count as f64 / total as f64) * 100.0).round() as u32
        };

        Self {
            total,
            by_category,
            by_status,
            by_engagement,
            open_source_count,
            closed_source_count: total - open_source_count,
            open_source_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::project::{EngagementLevel, Popularity, Status};

    fn project(name: &str, status: Status, level: EngagementLevel, open_source: bool) -> Project {
        Project {
            name: name.to_string(),
            url: None,
            repository_url: None,
            description: String::new(),
            category: "Marketplace".to_string(),
            status,
            open_source,
            popularity: Popularity {
                engagement_level: level,
                key_indicators: String::new(),
            },
            features: Vec::new(),
            launch_approx: String::new(),
            color: None,
        }
    }

    #[test]
    fn test_empty_catalog_guards_division() {
        let stats = CatalogStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.open_source_percent, 0);
        assert_eq!(stats.closed_source_count, 0);
    }

    #[test]
    fn test_open_source_split() {
        let projects = vec![
            project("A", Status::Live, EngagementLevel::High, true),
            project("B", Status::Beta, EngagementLevel::Low, false),
        ];
        let stats = CatalogStats::compute(&projects);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.open_source_count, 1);
        assert_eq!(stats.closed_source_count, 1);
        assert_eq!(stats.open_source_percent, 50);
    }

    #[test]
    fn test_group_sums_equal_total() {
        let projects = vec![
            project("A", Status::Live, EngagementLevel::High, true),
            project("B", Status::Live, EngagementLevel::Medium, false),
            project("C", Status::Beta, EngagementLevel::High, false),
        ];
        let stats = CatalogStats::compute(&projects);
        assert_eq!(stats.by_status.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_category.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_engagement.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn test_status_counts_use_wire_form() {
        let projects = vec![project(
            "A",
            Status::InDevelopment,
            EngagementLevel::Emerging,
            false,
        )];
        let stats = CatalogStats::compute(&projects);
        assert_eq!(stats.by_status.get("In Development"), Some(&1));
    }

    #[test]
    fn test_percent_rounds() {
        let projects = vec![
            project("A", Status::Live, EngagementLevel::High, true),
            project("B", Status::Live, EngagementLevel::High, false),
            project("C", Status::Live, EngagementLevel::High, false),
        ];
        // 1/3 = 33.33 -> 33
        assert_eq!(CatalogStats::compute(&projects).open_source_percent, 33);
    }
}
