//! Selection set and comparison support.
//!
//! The caller owns the selection; the engine only derives views from it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::project::Project;

/// Record names marked for side-by-side comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the name if absent, remove it if present. Returns true when the
    /// name is selected after the call.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// The selected records in original catalog order.
    pub fn selected<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|p| self.names.contains(&p.name))
            .collect()
    }
}

impl FromIterator<String> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Feature-presence matrix across a selection: the union of all feature
/// labels (deduplicated, lexically sorted) and one boolean row per record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeatureMatrix {
    /// Union of feature labels, lexically sorted.
    pub features: Vec<String>,
    pub rows: Vec<FeatureRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeatureRow {
    pub name: String,
    /// Parallel to [`FeatureMatrix::features`].
    pub has_feature: Vec<bool>,
}

impl FeatureMatrix {
    pub fn build(selected: &[&Project]) -> Self {
        let mut features: Vec<String> = selected
            .iter()
            .flat_map(|p| p.features.iter().cloned())
            .collect();
        features.sort();
        features.dedup();

        let rows = selected
            .iter()
            .map(|p| FeatureRow {
                name: p.name.clone(),
                has_feature: features.iter().map(|f| p.features.contains(f)).collect(),
            })
            .collect();

        Self { features, rows }
    }
}
