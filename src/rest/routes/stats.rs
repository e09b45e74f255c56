//! Aggregate statistics and filter-control endpoints.

use axum::{extract::State, Json};

use crate::rest::dto::{CategoriesResponse, EngagementLevelsResponse, StatsResponse};
use crate::rest::state::ApiState;

/// Aggregate counts over the full catalog
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    tag = "Stats",
    responses(
        (status = 200, description = "Counts by category, status, engagement, and open-source split", body = StatsResponse)
    )
)]
pub async fn stats(State(state): State<ApiState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        stats: state.catalog.stats(),
    })
}

/// Distinct categories present in the data
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Stats",
    responses(
        (status = 200, description = "Deduplicated, lexically sorted categories", body = CategoriesResponse)
    )
)]
pub async fn categories(State(state): State<ApiState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories().to_vec(),
    })
}

/// The fixed engagement enumeration
#[utoipa::path(
    get,
    path = "/api/v1/engagement-levels",
    tag = "Stats",
    responses(
        (status = 200, description = "All engagement levels, regardless of presence in data", body = EngagementLevelsResponse)
    )
)]
pub async fn engagement_levels(State(state): State<ApiState>) -> Json<EngagementLevelsResponse> {
    Json(EngagementLevelsResponse {
        engagement_levels: state.catalog.engagement_levels().to_vec(),
    })
}
