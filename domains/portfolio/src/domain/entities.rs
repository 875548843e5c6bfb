//! Domain entities for the Portfolio domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_common::{Error, Result};

/// Hand-curated portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PortfolioProject {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub tags: Vec<String>,
    pub date_added: DateTime<Utc>,
}

impl PortfolioProject {
    /// Create a new portfolio entry
    pub fn new(
        title: String,
        description: String,
        image_url: Option<String>,
        project_url: Option<String>,
        tags: Vec<String>,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(Error::Validation("title is required".to_string()));
        }
        if description.trim().is_empty() {
            return Err(Error::Validation("description is required".to_string()));
        }

        Ok(PortfolioProject {
            id: Uuid::new_v4(),
            title,
            description,
            image_url,
            project_url,
            tags,
            date_added: Utc::now(),
        })
    }
}
