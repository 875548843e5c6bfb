//! Repository implementations for the Blogs domain

pub mod blogs;

use sqlx::PgPool;

pub use blogs::{BlogChanges, BlogRepository};

/// Combined repository access for the Blogs domain
#[derive(Clone)]
pub struct BlogsRepositories {
    pool: PgPool,
    pub blogs: BlogRepository,
}

impl BlogsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            blogs: BlogRepository::new(pool.clone()),
            pool,
        }
    }

    /// Get a reference to the underlying database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
