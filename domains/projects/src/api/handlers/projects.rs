//! Project intake and lifecycle API handlers
//!
//! The status endpoint is a thin shell over the state machine: read the
//! record, ask the machine for an outcome, persist exactly what it
//! decided. All rejection reasons surface as 400 with the machine's
//! message.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use atelier_auth::AdminUser;
use atelier_common::{Error, Result, ValidatedJson};
use atelier_email::SubmissionDetails;

use crate::api::middleware::ProjectsState;
use crate::domain::entities::{Project, ProjectStatus, PublicProject};
use crate::domain::state::{ProjectState, TransitionOutcome, TransitionRequest};
use crate::repository::ProjectChanges;

/// Project response DTO (admin surface — includes contact fields)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub company_name: Option<String>,
    pub project_title: String,
    pub project_details: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: ProjectStatus,
    pub submitted_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub image_urls: Vec<String>,
    pub tech_stack: Vec<String>,
    pub video_url: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            phone_number: p.phone_number,
            company_name: p.company_name,
            project_title: p.project_title,
            project_details: p.project_details,
            start_date: p.start_date,
            end_date: p.end_date,
            status: p.status,
            submitted_at: p.submitted_at,
            approved_at: p.approved_at,
            completed_at: p.completed_at,
            image_urls: p.image_urls,
            tech_stack: p.tech_stack,
            video_url: p.video_url,
        }
    }
}

/// Public portfolio projection of a completed project
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProjectResponse {
    pub name: String,
    pub project_title: String,
    pub project_details: String,
    pub submitted_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub image_urls: Vec<String>,
    pub tech_stack: Vec<String>,
}

impl From<PublicProject> for PublicProjectResponse {
    fn from(p: PublicProject) -> Self {
        Self {
            name: p.name,
            project_title: p.project_title,
            project_details: p.project_details,
            submitted_at: p.submitted_at,
            completed_at: p.completed_at,
            image_urls: p.image_urls,
            tech_stack: p.tech_stack,
        }
    }
}

/// Request for submitting a new project
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "phoneNumber is required"))]
    pub phone_number: String,
    pub company_name: Option<String>,
    #[validate(length(min = 1, message = "projectTitle is required"))]
    pub project_title: String,
    #[validate(length(min = 1, message = "projectDetails is required"))]
    pub project_details: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Request for updating project status and/or auxiliary fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub status: Option<TransitionRequest>,
    pub image_urls: Option<Vec<String>>,
    pub tech_stack: Option<Vec<String>>,
    pub video_url: Option<String>,
}

/// Response carrying a message plus the record where one still exists
#[derive(Debug, Serialize)]
pub struct UpdateProjectResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectResponse>,
}

/// Submit a new project (public).
///
/// Persists the submission and notifies the site owner. Notification is
/// fire-and-forget: a mail failure is logged and never fails the response.
pub async fn submit_project(
    State(state): State<ProjectsState>,
    ValidatedJson(req): ValidatedJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<UpdateProjectResponse>)> {
    let project = Project::new(
        req.name,
        req.email,
        req.phone_number,
        req.company_name,
        req.project_title,
        req.project_details,
        req.start_date,
        req.end_date,
    )?;

    let created = state.repos.projects.create(&project).await?;

    let email = state.email.clone();
    let recipient = state.notify_email.clone();
    let submission = SubmissionDetails {
        project_id: created.id.to_string(),
        name: created.name.clone(),
        email: created.email.clone(),
        phone_number: created.phone_number.clone(),
        company_name: created.company_name.clone(),
        project_title: created.project_title.clone(),
        project_details: created.project_details.clone(),
        start_date: created.start_date,
        end_date: created.end_date,
    };
    tokio::spawn(async move {
        if let Err(e) = email.send_project_submission(&recipient, &submission).await {
            tracing::error!(
                error = %e,
                project_id = %submission.project_id,
                "Failed to send submission notification"
            );
        }
    });

    Ok((
        StatusCode::CREATED,
        Json(UpdateProjectResponse {
            message: "Project submitted successfully!".to_string(),
            project: Some(created.into()),
        }),
    ))
}

/// List all projects for the admin dashboard
pub async fn list_projects(
    AdminUser(_ctx): AdminUser,
    State(state): State<ProjectsState>,
) -> Result<Json<Vec<ProjectResponse>>> {
    let projects = state.repos.projects.list_all().await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// List completed projects for the public portfolio
pub async fn list_completed_projects(
    State(state): State<ProjectsState>,
) -> Result<Json<Vec<PublicProjectResponse>>> {
    let projects = state.repos.projects.list_completed().await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Update project status, images, tech stack, or video URL (admin).
///
/// The state machine decides; this handler persists. The update runs
/// guarded on the status read here, so two racing transitions cannot
/// both apply.
pub async fn update_project_status(
    AdminUser(_ctx): AdminUser,
    State(state): State<ProjectsState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<UpdateProjectResponse>> {
    let project = state
        .repos
        .projects
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Project not found".to_string()))?;

    // A decline deletes the record instead of storing a status; auxiliary
    // fields in the same request are irrelevant once the record is gone.
    if req.status == Some(TransitionRequest::Declined) {
        project.request_transition(TransitionRequest::Declined)?;
        if !state.repos.projects.delete_pending(id).await? {
            return Err(Error::Conflict(
                "Project was updated concurrently; re-read its status".to_string(),
            ));
        }
        return Ok(Json(UpdateProjectResponse {
            message: "Project declined and removed successfully.".to_string(),
            project: None,
        }));
    }

    let mut changes = ProjectChanges {
        image_urls: req.image_urls,
        tech_stack: req.tech_stack,
        video_url: req.video_url,
        ..Default::default()
    };

    if let Some(requested) = req.status {
        match project.request_transition(requested)? {
            TransitionOutcome::Apply(new_state) => {
                changes.status = Some(ProjectStatus::from_state(new_state));
                let now = Utc::now();
                match new_state {
                    ProjectState::Approved => changes.approved_at = Some(now),
                    ProjectState::Completed => changes.completed_at = Some(now),
                    ProjectState::Pending => {}
                }
            }
            // Declined was handled above
            TransitionOutcome::Delete => {
                return Err(Error::Internal(
                    "Unexpected delete outcome for a non-decline request".to_string(),
                ));
            }
        }
    }

    if changes.is_empty() {
        return Err(Error::Validation("No update data provided.".to_string()));
    }

    let updated = state
        .repos
        .projects
        .update_guarded(id, project.status, &changes)
        .await?
        .ok_or_else(|| {
            Error::Conflict("Project was updated concurrently; re-read its status".to_string())
        })?;

    Ok(Json(UpdateProjectResponse {
        message: "Project updated successfully".to_string(),
        project: Some(updated.into()),
    }))
}

/// Delete a project outright (admin). Allowed from any status.
pub async fn delete_project(
    AdminUser(_ctx): AdminUser,
    State(state): State<ProjectsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateProjectResponse>> {
    let deleted = state.repos.projects.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Project not found".to_string()));
    }
    Ok(Json(UpdateProjectResponse {
        message: "Project deleted successfully.".to_string(),
        project: None,
    }))
}
