//! Catalog of Moltbook ecosystem projects.
//!
//! The record set is loaded once at startup (from the embedded seed or a
//! configured file) and stays immutable for the life of the process. All
//! query operations derive new views; nothing here mutates the set.
//!
//! ## Components
//!
//! - [`Project`]: one cataloged entry with status, engagement, features
//! - [`Criteria`] / [`filter`] / [`sort_projects`]: derived views
//! - [`CatalogStats`]: aggregate counts independent of any live filter
//! - [`SelectionSet`] / [`FeatureMatrix`]: compare-view support

pub mod project;
pub mod query;
pub mod selection;
pub mod stats;

pub use project::{EngagementLevel, Popularity, Project, Status};
pub use query::{distinct_categories, filter, sort_projects, Criteria, SortDirection, SortField};
pub use selection::{FeatureMatrix, SelectionSet};
pub use stats::CatalogStats;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Seed data compiled into the binary; the catalog works without any
/// external files. Updating the directory is a republish of this file.
const BUILTIN_SEED: &str = include_str!("../../data/projects.json");

/// The immutable record set plus derived lookup data.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog from an already-parsed record list, validating the
    /// name-uniqueness invariant.
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if project.name.trim().is_empty() {
                bail!("catalog record with empty name");
            }
            if !seen.insert(project.name.as_str()) {
                bail!("duplicate catalog record name: '{}'", project.name);
            }
        }
        let categories = distinct_categories(&projects);
        Ok(Self {
            projects,
            categories,
        })
    }

    /// Parse the embedded seed dataset.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SEED).context("Failed to parse builtin seed data")
    }

    /// Load a seed file from disk (JSON array of records).
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid seed file: {}", path.display()))
    }

    fn from_json(raw: &str) -> Result<Self> {
        let projects: Vec<Project> =
            serde_json::from_str(raw).context("Failed to parse catalog records")?;
        Self::new(projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Exact-match lookup by record name.
    pub fn get(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Distinct categories present in the data, lexically sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The fixed engagement enumeration, regardless of presence in data.
    pub fn engagement_levels(&self) -> &'static [EngagementLevel] {
        EngagementLevel::all()
    }

    /// Aggregate counts over the full record set.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.projects)
    }

    /// Filtered then sorted view in one call, the shape the REST list
    /// endpoint and CLI both consume.
    pub fn query(
        &self,
        criteria: &Criteria,
        sort: Option<SortField>,
        direction: SortDirection,
    ) -> Vec<&Project> {
        let filtered = filter(&self.projects, criteria);
        match sort {
            Some(field) => sort_projects(&filtered, field, direction),
            None => filtered,
        }
    }
}
