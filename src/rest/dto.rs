//! Data Transfer Objects for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::catalog::project::link;
use crate::catalog::{Criteria, FeatureMatrix, Project, SortDirection, SortField, Status};
use crate::catalog::{CatalogStats, EngagementLevel};
use crate::rest::error::ApiError;

// =============================================================================
// Health DTOs
// =============================================================================

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service status with catalog info
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub project_count: usize,
    pub category_count: usize,
    pub webhook_configured: bool,
}

// =============================================================================
// Project DTOs
// =============================================================================

/// Full project record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub name: String,
    /// "N/A" when the project has no public link
    #[serde(with = "link")]
    #[schema(value_type = String)]
    pub url: Option<String>,
    #[serde(with = "link")]
    #[schema(value_type = String)]
    pub repository_url: Option<String>,
    pub description: String,
    pub category: String,
    pub status: Status,
    pub open_source: bool,
    pub engagement_level: EngagementLevel,
    pub key_indicators: String,
    pub features: Vec<String>,
    pub launch_approx: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&Project> for ProjectResponse {
    fn from(p: &Project) -> Self {
        Self {
            name: p.name.clone(),
            url: p.url.clone(),
            repository_url: p.repository_url.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            status: p.status,
            open_source: p.open_source,
            engagement_level: p.popularity.engagement_level,
            key_indicators: p.popularity.key_indicators.clone(),
            features: p.features.clone(),
            launch_approx: p.launch_approx.clone(),
            color: p.color.clone(),
        }
    }
}

/// Summary row for listing projects
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectSummary {
    pub name: String,
    pub category: String,
    pub status: Status,
    pub engagement_level: EngagementLevel,
    pub open_source: bool,
    pub feature_count: usize,
    pub launch_approx: String,
}

impl From<&Project> for ProjectSummary {
    fn from(p: &Project) -> Self {
        Self {
            name: p.name.clone(),
            category: p.category.clone(),
            status: p.status,
            engagement_level: p.popularity.engagement_level,
            open_source: p.open_source,
            feature_count: p.features.len(),
            launch_approx: p.launch_approx.clone(),
        }
    }
}

/// Query parameters for the project list endpoint.
///
/// All parameters are optional; absent ones impose no constraint. The
/// enumerated parameters (`status`, `engagement`, `sort`, `direction`)
/// reject unknown values with a 400 since they are API inputs, not free
/// text.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListProjectsQuery {
    /// Case-insensitive substring over name, description, category, features
    pub search: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// "Live", "Beta", or "In Development"
    pub status: Option<String>,
    /// "High", "Medium", "Low", or "Emerging"
    pub engagement: Option<String>,
    pub open_source: Option<bool>,
    /// name | category | status | engagement | features | launch
    pub sort: Option<String>,
    /// asc | desc
    pub direction: Option<String>,
}

impl ListProjectsQuery {
    pub fn criteria(&self) -> Result<Criteria, ApiError> {
        let status = self
            .status
            .as_deref()
            .map(|s| {
                Status::parse(s)
                    .ok_or_else(|| ApiError::ValidationError(format!("unknown status '{s}'")))
            })
            .transpose()?;
        let engagement = self
            .engagement
            .as_deref()
            .map(|s| {
                EngagementLevel::parse(s).ok_or_else(|| {
                    ApiError::ValidationError(format!("unknown engagement level '{s}'"))
                })
            })
            .transpose()?;

        Ok(Criteria {
            search: self.search.clone(),
            category: self.category.clone(),
            status,
            engagement,
            open_source: self.open_source,
        })
    }

    pub fn sort_field(&self) -> Result<Option<SortField>, ApiError> {
        self.sort
            .as_deref()
            .map(|s| {
                SortField::parse(s)
                    .ok_or_else(|| ApiError::ValidationError(format!("unknown sort field '{s}'")))
            })
            .transpose()
    }

    pub fn sort_direction(&self) -> Result<SortDirection, ApiError> {
        match self.direction.as_deref() {
            None => Ok(SortDirection::default()),
            Some(s) => SortDirection::parse(s)
                .ok_or_else(|| ApiError::ValidationError(format!("unknown direction '{s}'"))),
        }
    }
}

// =============================================================================
// Stats and category DTOs
// =============================================================================

/// Aggregate statistics block
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CatalogStats,
}

/// Distinct category values present in the catalog
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// The fixed engagement enumeration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EngagementLevelsResponse {
    pub engagement_levels: Vec<EngagementLevel>,
}

// =============================================================================
// Compare DTOs
// =============================================================================

/// Request to compare a selection of projects by name
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompareRequest {
    pub names: Vec<String>,
}

/// Side-by-side comparison: selected records in catalog order plus the
/// feature-presence matrix across the selection
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompareResponse {
    pub projects: Vec<ProjectResponse>,
    pub matrix: FeatureMatrix,
}

// =============================================================================
// Submission DTOs
// =============================================================================

/// Acknowledgement for an accepted submission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    pub message: String,
    pub id: String,
}

/// Where submissions are stored
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionsInfoResponse {
    pub message: String,
    pub webhook_configured: bool,
}
