//! Blogs domain: posts, slugs, draft/published visibility

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Blog, BlogStatus};
pub use domain::slug::slugify;
// Re-export repository types
pub use repository::{BlogChanges, BlogRepository, BlogsRepositories};

// Re-export API types
pub use api::routes;
pub use api::BlogsState;
