//! Portfolio catalog API handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use atelier_auth::AdminUser;
use atelier_common::{Result, ValidatedJson};

use crate::api::middleware::PortfolioState;
use crate::domain::entities::PortfolioProject;

/// Portfolio entry response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProjectResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub tags: Vec<String>,
    pub date_added: DateTime<Utc>,
}

impl From<PortfolioProject> for PortfolioProjectResponse {
    fn from(p: PortfolioProject) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            image_url: p.image_url,
            project_url: p.project_url,
            tags: p.tags,
            date_added: p.date_added,
        }
    }
}

/// Request for adding a portfolio entry
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// List all portfolio entries (public)
pub async fn list_portfolio(
    State(state): State<PortfolioState>,
) -> Result<Json<Vec<PortfolioProjectResponse>>> {
    let entries = state.repos.portfolio.list().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Add a portfolio entry (admin)
pub async fn create_portfolio_project(
    AdminUser(_ctx): AdminUser,
    State(state): State<PortfolioState>,
    ValidatedJson(req): ValidatedJson<CreatePortfolioRequest>,
) -> Result<(StatusCode, Json<PortfolioProjectResponse>)> {
    let entry = PortfolioProject::new(
        req.title,
        req.description,
        req.image_url,
        req.project_url,
        req.tags,
    )?;
    let created = state.repos.portfolio.create(&entry).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
