//! Route definitions for the Projects domain API

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::projects;
use super::middleware::ProjectsState;

/// Create all Projects domain API routes
pub fn routes() -> Router<ProjectsState> {
    Router::new()
        .route(
            "/api/projects",
            post(projects::submit_project).get(projects::list_projects),
        )
        .route(
            "/api/projects/completed",
            get(projects::list_completed_projects),
        )
        .route(
            "/api/projects/{id}/status",
            put(projects::update_project_status),
        )
        .route("/api/projects/{id}", delete(projects::delete_project))
}
