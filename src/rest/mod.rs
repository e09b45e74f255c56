//! REST API for the Moltdex project directory.
//!
//! Provides HTTP endpoints for listing, filtering, and comparing catalog
//! entries, aggregate statistics, and submission intake.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::ApiState;

/// Default port for the REST API server
pub const DEFAULT_PORT: u16 = 7036;

/// Build the API router with all routes
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/api/v1/health", get(routes::health::health))
        .route("/api/v1/status", get(routes::health::status))
        // Project endpoints
        .route("/api/v1/projects", get(routes::projects::list))
        .route("/api/v1/projects/:name", get(routes::projects::get_one))
        // Stats endpoints
        .route("/api/v1/stats", get(routes::stats::stats))
        .route("/api/v1/categories", get(routes::stats::categories))
        .route(
            "/api/v1/engagement-levels",
            get(routes::stats::engagement_levels),
        )
        // Compare endpoint
        .route("/api/v1/compare", post(routes::compare::compare))
        // Submission endpoints
        .route(
            "/api/v1/submissions",
            post(routes::submissions::create).get(routes::submissions::info),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the REST API server
pub async fn serve(state: ApiState, port: u16) -> Result<()> {
    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("REST API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
