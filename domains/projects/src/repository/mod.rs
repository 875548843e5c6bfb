//! Repository implementations for the Projects domain

pub mod projects;

use sqlx::PgPool;

pub use projects::{ProjectChanges, ProjectRepository};

/// Combined repository access for the Projects domain
#[derive(Clone)]
pub struct ProjectsRepositories {
    pool: PgPool,
    pub projects: ProjectRepository,
}

impl ProjectsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            projects: ProjectRepository::new(pool.clone()),
            pool,
        }
    }

    /// Get a reference to the underlying database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
