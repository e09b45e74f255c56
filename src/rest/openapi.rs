//! OpenAPI specification builder using utoipa.

use utoipa::OpenApi;

use crate::catalog::selection::{FeatureMatrix, FeatureRow};
use crate::catalog::{CatalogStats, EngagementLevel, Status};
use crate::rest::dto::{
    CategoriesResponse, CompareRequest, CompareResponse, EngagementLevelsResponse, HealthResponse,
    ProjectResponse, ProjectSummary, StatsResponse, StatusResponse, SubmissionResponse,
    SubmissionsInfoResponse,
};
use crate::rest::error::ErrorResponse;
use crate::submit::SubmissionRequest;

/// OpenAPI documentation for the Moltdex REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Moltdex API",
        version = "0.1.0",
        description = "REST API for the Moltbook ecosystem project directory.",
        license(name = "MIT")
    ),
    paths(
        // Health endpoints
        crate::rest::routes::health::health,
        crate::rest::routes::health::status,
        // Project endpoints
        crate::rest::routes::projects::list,
        crate::rest::routes::projects::get_one,
        // Stats endpoints
        crate::rest::routes::stats::stats,
        crate::rest::routes::stats::categories,
        crate::rest::routes::stats::engagement_levels,
        // Compare endpoint
        crate::rest::routes::compare::compare,
        // Submission endpoints
        crate::rest::routes::submissions::create,
        crate::rest::routes::submissions::info,
    ),
    components(
        schemas(
            // Response types
            HealthResponse,
            StatusResponse,
            ProjectResponse,
            ProjectSummary,
            StatsResponse,
            CategoriesResponse,
            EngagementLevelsResponse,
            CompareResponse,
            SubmissionResponse,
            SubmissionsInfoResponse,
            ErrorResponse,
            // Request types
            CompareRequest,
            SubmissionRequest,
            // Domain enums
            Status,
            EngagementLevel,
            CatalogStats,
            FeatureMatrix,
            FeatureRow,
        )
    ),
    tags(
        (name = "Health", description = "Health check and status endpoints"),
        (name = "Projects", description = "Catalog listing and detail"),
        (name = "Stats", description = "Aggregates and filter-control data"),
        (name = "Compare", description = "Side-by-side project comparison"),
        (name = "Submissions", description = "New directory entry intake"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI specification as a JSON string
    pub fn json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }

    /// Generate the OpenAPI specification as a YAML string
    pub fn yaml() -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&Self::openapi())
    }
}
