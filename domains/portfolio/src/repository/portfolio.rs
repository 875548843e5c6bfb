//! Portfolio entry repository

use crate::domain::entities::PortfolioProject;
use atelier_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PortfolioRepository {
    pool: PgPool,
}

impl PortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all portfolio entries, most recently added first
    pub async fn list(&self) -> Result<Vec<PortfolioProject>> {
        let rows = sqlx::query_as::<_, PortfolioProject>(
            r#"
            SELECT id, title, description, image_url, project_url, tags, date_added
            FROM portfolio_projects
            ORDER BY date_added DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a new portfolio entry
    pub async fn create(&self, entry: &PortfolioProject) -> Result<PortfolioProject> {
        let row = sqlx::query_as::<_, PortfolioProject>(
            r#"
            INSERT INTO portfolio_projects (id, title, description, image_url,
                                            project_url, tags, date_added)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, image_url, project_url, tags, date_added
            "#,
        )
        .bind(entry.id)
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(&entry.image_url)
        .bind(&entry.project_url)
        .bind(&entry.tags)
        .bind(entry.date_added)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
