//! Blog content API handlers

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

use crate::api::middleware::BlogsState;
use crate::domain::entities::{Blog, BlogStatus, MAX_EXCERPT_LENGTH};
use crate::domain::slug::slugify;
use crate::repository::BlogChanges;

/// Blog post response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub category: String,
    pub author: String,
    pub status: BlogStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogResponse {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            slug: b.slug,
            content: b.content,
            excerpt: b.excerpt,
            image_url: b.image_url,
            category: b.category,
            author: b.author,
            status: b.status,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Request for creating a post
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[validate(length(min = 1, max = 300, message = "excerpt is required and must be ≤300 characters"))]
    pub excerpt: String,
    #[validate(length(min = 1, message = "imageUrl is required"))]
    pub image_url: String,
    pub category: Option<String>,
    pub status: Option<BlogStatus>,
}

/// Request for updating a post; absent fields are left untouched
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[validate(length(max = 300, message = "excerpt must be ≤300 characters"))]
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub status: Option<BlogStatus>,
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List published posts (public)
pub async fn list_published(State(state): State<BlogsState>) -> Result<Json<Vec<BlogResponse>>> {
    let posts = state.repos.blogs.list_published().await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// List every post including drafts (admin)
pub async fn list_all(
    AdminUser(_ctx): AdminUser,
    State(state): State<BlogsState>,
) -> Result<Json<Vec<BlogResponse>>> {
    let posts = state.repos.blogs.list_all().await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// Fetch a single post by slug (public)
pub async fn get_by_slug(
    State(state): State<BlogsState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogResponse>> {
    let post = state
        .repos
        .blogs
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| Error::NotFound("Post not found".to_string()))?;
    Ok(Json(post.into()))
}

/// Create a post (admin)
pub async fn create_blog(
    AdminUser(_ctx): AdminUser,
    State(state): State<BlogsState>,
    ValidatedJson(req): ValidatedJson<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>)> {
    let blog = Blog::new(
        req.title,
        req.content,
        req.excerpt,
        req.image_url,
        req.category,
        req.status,
    )?;
    let created = state.repos.blogs.create(&blog).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update a post (admin). A changed title re-derives the slug.
pub async fn update_blog(
    AdminUser(_ctx): AdminUser,
    State(state): State<BlogsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>> {
    let slug = match &req.title {
        Some(title) => {
            let slug = slugify(title);
            if slug.is_empty() {
                return Err(Error::Validation(
                    "Title must contain at least one alphanumeric character".to_string(),
                ));
            }
            Some(slug)
        }
        None => None,
    };

    let changes = BlogChanges {
        title: req.title,
        slug,
        content: req.content,
        excerpt: req.excerpt,
        image_url: req.image_url,
        category: req.category,
        status: req.status,
    };

    let updated = state
        .repos
        .blogs
        .update(id, &changes)
        .await?
        .ok_or_else(|| Error::NotFound("Post not found".to_string()))?;

    Ok(Json(updated.into()))
}

/// Delete a post (admin)
pub async fn delete_blog(
    AdminUser(_ctx): AdminUser,
    State(state): State<BlogsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>> {
    let deleted = state.repos.blogs.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Post not found".to_string()));
    }
    Ok(Json(MessageResponse {
        message: "Post deleted successfully.".to_string(),
    }))
}
