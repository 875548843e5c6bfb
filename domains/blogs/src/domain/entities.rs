//! Domain entities for the Blogs domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_common::{Error, Result};

use crate::domain::slug::slugify;

/// Blog post visibility status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "blog_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
}

/// Maximum excerpt length
pub const MAX_EXCERPT_LENGTH: usize = 300;

/// Default category for uncategorized posts
pub const DEFAULT_CATEGORY: &str = "General";

/// Default author byline
pub const DEFAULT_AUTHOR: &str = "Atelier Studio";

/// Blog post entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    /// Rendered HTML from the rich-text editor
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub category: String,
    pub author: String,
    pub status: BlogStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new post; the slug is derived from the title
    pub fn new(
        title: String,
        content: String,
        excerpt: String,
        image_url: String,
        category: Option<String>,
        status: Option<BlogStatus>,
    ) -> Result<Self> {
        let slug = slugify(&title);
        let now = Utc::now();
        let blog = Blog {
            id: Uuid::new_v4(),
            title,
            slug,
            content,
            excerpt,
            image_url,
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            author: DEFAULT_AUTHOR.to_string(),
            status: status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        blog.validate()?;
        Ok(blog)
    }

    /// Validate invariants: required fields present, excerpt bounded,
    /// slug non-empty
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("title", &self.title),
            ("content", &self.content),
            ("excerpt", &self.excerpt),
            ("imageUrl", &self.image_url),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "Title, content, excerpt, and image URL are required ({} missing)",
                    field
                )));
            }
        }

        if self.excerpt.len() > MAX_EXCERPT_LENGTH {
            return Err(Error::Validation(format!(
                "Excerpt must be ≤{} characters",
                MAX_EXCERPT_LENGTH
            )));
        }

        if self.slug.is_empty() {
            return Err(Error::Validation(
                "Title must contain at least one alphanumeric character".to_string(),
            ));
        }

        Ok(())
    }
}
