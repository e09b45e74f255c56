//! Filtering and sorting over the immutable record set.
//!
//! All operations here are pure: they borrow the caller's slice, never
//! reorder or mutate it, and return freshly built vectors of references.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::project::{EngagementLevel, Project, Status};

/// Active filter constraints. Unset fields impose no constraint; all set
/// fields must match (logical AND).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Case-insensitive substring over name, description, category, and
    /// feature labels. Blank or whitespace-only text is ignored.
    pub search: Option<String>,
    /// Exact category match, no normalization.
    pub category: Option<String>,
    pub status: Option<Status>,
    pub engagement: Option<EngagementLevel>,
    /// Tri-state: `Some(true)` / `Some(false)` constrain, `None` does not.
    pub open_source: Option<bool>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }

    fn matches(&self, project: &Project) -> bool {
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !project.matches_lowercase(&needle) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &project.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }
        if let Some(engagement) = self.engagement {
            if project.popularity.engagement_level != engagement {
                return false;
            }
        }
        if let Some(open_source) = self.open_source {
            if project.open_source != open_source {
                return false;
            }
        }
        true
    }
}

/// Select the records passing every supplied constraint, preserving input
/// order. Malformed criteria degrade to "no constraint"; this never fails.
pub fn filter<'a>(projects: &'a [Project], criteria: &Criteria) -> Vec<&'a Project> {
    projects.iter().filter(|p| criteria.matches(p)).collect()
}

/// Sortable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Category,
    Status,
    Engagement,
    /// Orders by feature count, not feature content.
    Features,
    Launch,
}

impl SortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortField::Name),
            "category" => Some(SortField::Category),
            "status" => Some(SortField::Status),
            "engagement" => Some(SortField::Engagement),
            "features" => Some(SortField::Features),
            "launch" => Some(SortField::Launch),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Coarse chronological key parsed from a launch label.
///
/// Labels like "January 2026" or "January/February 2026" parse to the
/// first named month; anything else ("Upcoming", "TBD") has no key and
/// sorts after every dated label. Ties fall back to the raw label.
fn launch_key(label: &str) -> Option<(i32, u8)> {
    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    let lower = label.to_lowercase();
    let year: i32 = lower
        .split(|c: char| !c.is_ascii_digit())
        .find(|s| s.len() == 4)?
        .parse()
        .ok()?;
    let month = MONTHS
        .iter()
        .enumerate()
        .filter_map(|(i, m)| Some((lower.find(*m)?, i as u8 + 1)))
        .min()
        .map(|(_, m)| m)?;
    Some((year, month))
}

fn compare(a: &Project, b: &Project, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Category => a.category.cmp(&b.category),
        SortField::Status => a.status.rank().cmp(&b.status.rank()),
        SortField::Engagement => a
            .popularity
            .engagement_level
            .rank()
            .cmp(&b.popularity.engagement_level.rank()),
        SortField::Features => a.features.len().cmp(&b.features.len()),
        SortField::Launch => match (launch_key(&a.launch_approx), launch_key(&b.launch_approx)) {
            (Some(ka), Some(kb)) => ka.cmp(&kb),
            // Dated labels sort before undated ones
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| a.launch_approx.cmp(&b.launch_approx)),
    }
}

/// Stable sort into a new vector; the input slice is untouched. Descending
/// negates the comparator, so equal keys keep their input order either way.
pub fn sort_projects<'a>(
    projects: &[&'a Project],
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a Project> {
    let mut sorted = projects.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Category values actually present, deduplicated and lexically sorted.
pub fn distinct_categories(projects: &[Project]) -> Vec<String> {
    let mut categories: Vec<String> = projects.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}
