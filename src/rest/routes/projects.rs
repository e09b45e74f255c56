//! Project listing and detail endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::rest::dto::{ListProjectsQuery, ProjectResponse, ProjectSummary};
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::state::ApiState;

/// List projects, filtered and sorted
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "Projects",
    params(ListProjectsQuery),
    responses(
        (status = 200, description = "Matching projects in query order", body = Vec<ProjectSummary>),
        (status = 400, description = "Unknown enum value in a query parameter", body = ErrorResponse)
    )
)]
pub async fn list(
    State(state): State<ApiState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<Vec<ProjectSummary>>, ApiError> {
    let criteria = query.criteria()?;
    let sort = query.sort_field()?;
    let direction = query.sort_direction()?;

    let projects = state.catalog.query(&criteria, sort, direction);
    Ok(Json(projects.into_iter().map(ProjectSummary::from).collect()))
}

/// Get a single project by name (exact match)
#[utoipa::path(
    get,
    path = "/api/v1/projects/{name}",
    tag = "Projects",
    params(
        ("name" = String, Path, description = "Project name, the catalog key")
    ),
    responses(
        (status = 200, description = "Full project record", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
pub async fn get_one(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .catalog
        .get(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Project '{name}' not found")))?;

    Ok(Json(ProjectResponse::from(project)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn make_state() -> ApiState {
        ApiState::from_config(Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_list_unfiltered() {
        let state = make_state();
        let total = state.catalog.len();
        let resp = list(State(state), Query(ListProjectsQuery::default()))
            .await
            .unwrap();
        assert_eq!(resp.0.len(), total);
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let state = make_state();
        let category = state.catalog.categories()[0].clone();
        let query = ListProjectsQuery {
            category: Some(category.clone()),
            ..ListProjectsQuery::default()
        };
        let resp = list(State(state), Query(query)).await.unwrap();
        assert!(!resp.0.is_empty());
        assert!(resp.0.iter().all(|p| p.category == category));
    }

    #[tokio::test]
    async fn test_list_sorts_by_name() {
        let state = make_state();
        let query = ListProjectsQuery {
            sort: Some("name".to_string()),
            ..ListProjectsQuery::default()
        };
        let resp = list(State(state), Query(query)).await.unwrap();
        assert!(resp.0.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[tokio::test]
    async fn test_list_rejects_bad_status() {
        let state = make_state();
        let query = ListProjectsQuery {
            status: Some("Cancelled".to_string()),
            ..ListProjectsQuery::default()
        };
        let result = list(State(state), Query(query)).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_get_one_exists() {
        let state = make_state();
        let name = state.catalog.projects()[0].name.clone();
        let resp = get_one(State(state), Path(name.clone())).await.unwrap();
        assert_eq!(resp.name, name);
    }

    #[tokio::test]
    async fn test_get_one_not_found() {
        let state = make_state();
        let result = get_one(State(state), Path("does-not-exist".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
