//! Domain entities for the Projects domain
//!
//! The project entity carries the intake fields submitted by a client and
//! the lifecycle fields owned by the status state machine. Descriptive
//! fields are validated for presence only; they never affect transition
//! eligibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_common::{Error, Result};

use crate::domain::state::{
    ProjectState, ProjectStateMachine, TransitionOutcome, TransitionRequest,
};

/// Stored project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "project_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Pending,
    Approved,
    Completed,
}

impl ProjectStatus {
    /// Convert to state machine state
    pub fn to_state(&self) -> ProjectState {
        match self {
            ProjectStatus::Pending => ProjectState::Pending,
            ProjectStatus::Approved => ProjectState::Approved,
            ProjectStatus::Completed => ProjectState::Completed,
        }
    }

    /// Create from state machine state
    pub fn from_state(state: ProjectState) -> Self {
        match state {
            ProjectState::Pending => ProjectStatus::Pending,
            ProjectState::Approved => ProjectStatus::Approved,
            ProjectState::Completed => ProjectStatus::Completed,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    #[mutants::skip] // Delegates to ProjectState Display
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_state().fmt(f)
    }
}

/// Project entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
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

impl Project {
    /// Create a new pending project from submitted intake fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        phone_number: String,
        company_name: Option<String>,
        project_title: String,
        project_details: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Self> {
        let project = Project {
            id: Uuid::new_v4(),
            name,
            email,
            phone_number,
            company_name,
            project_title,
            project_details,
            start_date,
            end_date,
            status: ProjectStatus::default(),
            submitted_at: Utc::now(),
            approved_at: None,
            completed_at: None,
            image_urls: Vec::new(),
            tech_stack: Vec::new(),
            video_url: None,
        };
        project.validate()?;
        Ok(project)
    }

    /// Validate presence of the required intake fields
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phoneNumber", &self.phone_number),
            ("projectTitle", &self.project_title),
            ("projectDetails", &self.project_details),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!("{} is required", field)));
            }
        }
        if !self.email.contains('@') {
            return Err(Error::Validation("email must be a valid address".to_string()));
        }
        Ok(())
    }

    /// Current state machine state
    pub fn state(&self) -> ProjectState {
        self.status.to_state()
    }

    /// Decide the outcome of a requested transition without applying it
    pub fn request_transition(
        &self,
        requested: TransitionRequest,
    ) -> Result<TransitionOutcome> {
        ProjectStateMachine::request_transition(self.state(), requested).map_err(Into::into)
    }

    /// Approve a pending project, stamping `approved_at` exactly once
    pub fn approve(&mut self) -> Result<()> {
        self.apply(TransitionRequest::Approved)
    }

    /// Complete an approved project, stamping `completed_at` exactly once
    pub fn complete(&mut self) -> Result<()> {
        self.apply(TransitionRequest::Completed)
    }

    fn apply(&mut self, requested: TransitionRequest) -> Result<()> {
        match self.request_transition(requested)? {
            TransitionOutcome::Apply(new_state) => {
                self.status = ProjectStatus::from_state(new_state);
                let now = Utc::now();
                match new_state {
                    ProjectState::Approved if self.approved_at.is_none() => {
                        self.approved_at = Some(now);
                    }
                    ProjectState::Completed if self.completed_at.is_none() => {
                        self.completed_at = Some(now);
                    }
                    _ => {}
                }
                Ok(())
            }
            TransitionOutcome::Delete => Err(Error::Validation(
                "Declined projects are deleted, not stored".to_string(),
            )),
        }
    }
}

/// Public-safe projection of a completed project for portfolio display.
///
/// Excludes contact details (email, phone, company) entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PublicProject {
    pub name: String,
    pub project_title: String,
    pub project_details: String,
    pub submitted_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub image_urls: Vec<String>,
    pub tech_stack: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_project() -> Project {
        Project::new(
            "Ada Lovelace".to_string(),
            "ada@example.com".to_string(),
            "+44 1234 567890".to_string(),
            Some("Babbage & Co".to_string()),
            "Analytical Engine Site".to_string(),
            "A marketing site for the engine.".to_string(),
            Utc::now(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_project_starts_pending() {
        let project = pending_project();
        assert_eq!(project.status, ProjectStatus::Pending);
        assert!(project.approved_at.is_none());
        assert!(project.completed_at.is_none());
        assert!(project.image_urls.is_empty());
    }

    #[test]
    fn test_new_project_requires_fields() {
        let result = Project::new(
            "".to_string(),
            "ada@example.com".to_string(),
            "+44".to_string(),
            None,
            "Title".to_string(),
            "Details".to_string(),
            Utc::now(),
            Utc::now(),
        );
        assert!(result.is_err());

        let result = Project::new(
            "Ada".to_string(),
            "not-an-email".to_string(),
            "+44".to_string(),
            None,
            "Title".to_string(),
            "Details".to_string(),
            Utc::now(),
            Utc::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_approve_stamps_timestamp() {
        let mut project = pending_project();
        project.approve().unwrap();
        assert_eq!(project.status, ProjectStatus::Approved);
        assert!(project.approved_at.is_some());
        assert!(project.completed_at.is_none());
    }

    #[test]
    fn test_complete_after_approve() {
        let mut project = pending_project();
        project.approve().unwrap();
        let approved_at = project.approved_at;

        project.complete().unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);
        assert!(project.completed_at.is_some());
        // Approval timestamp is not rewritten by later transitions
        assert_eq!(project.approved_at, approved_at);
    }

    #[test]
    fn test_complete_pending_rejected() {
        let mut project = pending_project();
        let result = project.complete();
        assert!(result.is_err());
        assert_eq!(project.status, ProjectStatus::Pending);
        assert!(project.completed_at.is_none());
    }

    #[test]
    fn test_double_approve_rejected() {
        let mut project = pending_project();
        project.approve().unwrap();
        let result = project.approve();
        assert!(result.is_err());
        assert_eq!(project.status, ProjectStatus::Approved);
    }

    #[test]
    fn test_decline_request_is_delete_outcome() {
        let project = pending_project();
        let outcome = project
            .request_transition(TransitionRequest::Declined)
            .unwrap();
        assert_eq!(outcome, TransitionOutcome::Delete);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ProjectStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let parsed: ProjectStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, ProjectStatus::Completed);
    }

    #[test]
    fn test_status_state_round_trip() {
        for status in [
            ProjectStatus::Pending,
            ProjectStatus::Approved,
            ProjectStatus::Completed,
        ] {
            assert_eq!(ProjectStatus::from_state(status.to_state()), status);
        }
    }
}
