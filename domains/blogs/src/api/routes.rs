//! Route definitions for the Blogs domain API

use axum::{routing::get, Router};

use super::handlers::blogs;
use super::middleware::BlogsState;

/// Create all Blogs domain API routes.
///
/// `/api/blogs/all` is a static segment so it wins over the capture
/// below it. GET captures a slug; PUT/DELETE capture a post ID on the
/// same segment.
pub fn routes() -> Router<BlogsState> {
    Router::new()
        .route(
            "/api/blogs",
            get(blogs::list_published).post(blogs::create_blog),
        )
        .route("/api/blogs/all", get(blogs::list_all))
        .route(
            "/api/blogs/{slug}",
            get(blogs::get_by_slug)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
}
