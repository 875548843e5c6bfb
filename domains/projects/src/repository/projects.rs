//! Project repository

use crate::domain::entities::{Project, ProjectStatus, PublicProject};
use atelier_common::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Field mutations applied alongside (or instead of) a status change.
///
/// `None` fields are left untouched by the update statement.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub status: Option<ProjectStatus>,
    pub approved_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub image_urls: Option<Vec<String>>,
    pub tech_stack: Option<Vec<String>>,
    pub video_url: Option<String>,
}

impl ProjectChanges {
    /// Whether this update would touch nothing
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.image_urls.is_none()
            && self.tech_stack.is_none()
            && self.video_url.is_none()
    }
}

#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find project by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Project>> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, email, phone_number, company_name, project_title,
                   project_details, start_date, end_date, status, submitted_at,
                   approved_at, completed_at, image_urls, tech_stack, video_url
            FROM projects WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all projects for the admin dashboard, newest submissions first
    pub async fn list_all(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, email, phone_number, company_name, project_title,
                   project_details, start_date, end_date, status, submitted_at,
                   approved_at, completed_at, image_urls, tech_stack, video_url
            FROM projects
            ORDER BY submitted_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List completed projects projected to the public-safe field subset,
    /// most recently completed first
    pub async fn list_completed(&self) -> Result<Vec<PublicProject>> {
        let rows = sqlx::query_as::<_, PublicProject>(
            r#"
            SELECT name, project_title, project_details, submitted_at,
                   completed_at, image_urls, tech_stack
            FROM projects
            WHERE status = 'completed'
            ORDER BY completed_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a new project
    pub async fn create(&self, project: &Project) -> Result<Project> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (id, name, email, phone_number, company_name,
                                  project_title, project_details, start_date, end_date,
                                  status, submitted_at, approved_at, completed_at,
                                  image_urls, tech_stack, video_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING id, name, email, phone_number, company_name, project_title,
                      project_details, start_date, end_date, status, submitted_at,
                      approved_at, completed_at, image_urls, tech_stack, video_url
            "#,
        )
        .bind(project.id)
        .bind(&project.name)
        .bind(&project.email)
        .bind(&project.phone_number)
        .bind(&project.company_name)
        .bind(&project.project_title)
        .bind(&project.project_details)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.status)
        .bind(project.submitted_at)
        .bind(project.approved_at)
        .bind(project.completed_at)
        .bind(&project.image_urls)
        .bind(&project.tech_stack)
        .bind(&project.video_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply field mutations guarded by the status the caller just read.
    ///
    /// The `WHERE status = $2` predicate is the concurrency guard: if a
    /// concurrent request already moved the project past `expected`, zero
    /// rows match and `None` comes back instead of a double-applied
    /// transition. Timestamps use COALESCE so they are set exactly once.
    pub async fn update_guarded(
        &self,
        id: Uuid,
        expected: ProjectStatus,
        changes: &ProjectChanges,
    ) -> Result<Option<Project>> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                status = COALESCE($3, status),
                approved_at = COALESCE(approved_at, $4),
                completed_at = COALESCE(completed_at, $5),
                image_urls = COALESCE($6, image_urls),
                tech_stack = COALESCE($7, tech_stack),
                video_url = COALESCE($8, video_url)
            WHERE id = $1 AND status = $2
            RETURNING id, name, email, phone_number, company_name, project_title,
                      project_details, start_date, end_date, status, submitted_at,
                      approved_at, completed_at, image_urls, tech_stack, video_url
            "#,
        )
        .bind(id)
        .bind(expected)
        .bind(changes.status)
        .bind(changes.approved_at)
        .bind(changes.completed_at)
        .bind(&changes.image_urls)
        .bind(&changes.tech_stack)
        .bind(&changes.video_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a project by ID
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a project only while it is still pending (decline path).
    ///
    /// Guarded the same way as `update_guarded` so a decline racing an
    /// approve cannot remove an already-approved project.
    pub async fn delete_pending(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND status = 'pending'")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
