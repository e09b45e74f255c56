//! Side-by-side comparison endpoint.

use axum::{extract::State, Json};

use crate::catalog::{FeatureMatrix, SelectionSet};
use crate::rest::dto::{CompareRequest, CompareResponse, ProjectResponse};
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::state::ApiState;

/// Compare a selection of projects
///
/// Returns the selected records in catalog order plus the union feature
/// matrix across the selection.
#[utoipa::path(
    post,
    path = "/api/v1/compare",
    tag = "Compare",
    request_body = CompareRequest,
    responses(
        (status = 200, description = "Selected records and feature matrix", body = CompareResponse),
        (status = 404, description = "A requested name is not in the catalog", body = ErrorResponse)
    )
)]
pub async fn compare(
    State(state): State<ApiState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    for name in &request.names {
        if state.catalog.get(name).is_none() {
            return Err(ApiError::NotFound(format!("Project '{name}' not found")));
        }
    }

    let selection: SelectionSet = request.names.into_iter().collect();
    let selected = selection.selected(state.catalog.projects());
    let matrix = FeatureMatrix::build(&selected);

    Ok(Json(CompareResponse {
        projects: selected.iter().map(|p| ProjectResponse::from(*p)).collect(),
        matrix,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn make_state() -> ApiState {
        ApiState::from_config(Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_compare_returns_catalog_order() {
        let state = make_state();
        let first = state.catalog.projects()[0].name.clone();
        let second = state.catalog.projects()[1].name.clone();

        // Request in reverse order; response follows catalog order
        let request = CompareRequest {
            names: vec![second.clone(), first.clone()],
        };
        let resp = compare(State(state), Json(request)).await.unwrap();
        assert_eq!(resp.projects.len(), 2);
        assert_eq!(resp.projects[0].name, first);
        assert_eq!(resp.projects[1].name, second);
    }

    #[tokio::test]
    async fn test_compare_builds_matrix() {
        let state = make_state();
        let names: Vec<String> = state
            .catalog
            .projects()
            .iter()
            .take(3)
            .map(|p| p.name.clone())
            .collect();
        let resp = compare(State(state), Json(CompareRequest { names }))
            .await
            .unwrap();
        assert_eq!(resp.matrix.rows.len(), 3);
        assert!(resp
            .matrix
            .features
            .windows(2)
            .all(|w| w[0] < w[1]));
        for row in &resp.matrix.rows {
            assert_eq!(row.has_feature.len(), resp.matrix.features.len());
        }
    }

    #[tokio::test]
    async fn test_compare_unknown_name_is_404() {
        let state = make_state();
        let request = CompareRequest {
            names: vec!["not-a-project".to_string()],
        };
        let result = compare(State(state), Json(request)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_compare_empty_selection() {
        let state = make_state();
        let resp = compare(State(state), Json(CompareRequest { names: vec![] }))
            .await
            .unwrap();
        assert!(resp.projects.is_empty());
        assert!(resp.matrix.features.is_empty());
    }
}
