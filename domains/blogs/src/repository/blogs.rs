//! Blog post repository

use crate::domain::entities::{Blog, BlogStatus};
use atelier_common::{is_unique_violation, Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

const DUPLICATE_TITLE: &str = "A post with this title already exists.";

/// Field mutations for a post update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub status: Option<BlogStatus>,
}

#[derive(Clone)]
pub struct BlogRepository {
    pool: PgPool,
}

impl BlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List published posts, newest first (public)
    pub async fn list_published(&self) -> Result<Vec<Blog>> {
        let rows = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, slug, content, excerpt, image_url, category,
                   author, status, created_at, updated_at
            FROM blogs
            WHERE status = 'published'
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List every post including drafts, newest first (admin)
    pub async fn list_all(&self) -> Result<Vec<Blog>> {
        let rows = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, slug, content, excerpt, image_url, category,
                   author, status, created_at, updated_at
            FROM blogs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Find a post by its slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>> {
        let row = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, slug, content, excerpt, image_url, category,
                   author, status, created_at, updated_at
            FROM blogs WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Create a new post. Duplicate titles/slugs surface as 409.
    pub async fn create(&self, blog: &Blog) -> Result<Blog> {
        let row = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (id, title, slug, content, excerpt, image_url,
                               category, author, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, title, slug, content, excerpt, image_url, category,
                      author, status, created_at, updated_at
            "#,
        )
        .bind(blog.id)
        .bind(&blog.title)
        .bind(&blog.slug)
        .bind(&blog.content)
        .bind(&blog.excerpt)
        .bind(&blog.image_url)
        .bind(&blog.category)
        .bind(&blog.author)
        .bind(blog.status)
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::Conflict(DUPLICATE_TITLE.to_string())
            } else {
                Error::Database(e)
            }
        })?;
        Ok(row)
    }

    /// Update a post by ID. Returns `None` when the ID is unknown.
    pub async fn update(&self, id: Uuid, changes: &BlogChanges) -> Result<Option<Blog>> {
        let row = sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                content = COALESCE($4, content),
                excerpt = COALESCE($5, excerpt),
                image_url = COALESCE($6, image_url),
                category = COALESCE($7, category),
                status = COALESCE($8, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, slug, content, excerpt, image_url, category,
                      author, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.slug)
        .bind(&changes.content)
        .bind(&changes.excerpt)
        .bind(&changes.image_url)
        .bind(&changes.category)
        .bind(changes.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::Conflict(DUPLICATE_TITLE.to_string())
            } else {
                Error::Database(e)
            }
        })?;
        Ok(row)
    }

    /// Delete a post by ID
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
