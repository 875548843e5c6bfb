//! Repository implementations for the Portfolio domain

pub mod portfolio;

use sqlx::PgPool;

pub use portfolio::PortfolioRepository;

/// Combined repository access for the Portfolio domain
#[derive(Clone)]
pub struct PortfolioRepositories {
    pool: PgPool,
    pub portfolio: PortfolioRepository,
}

impl PortfolioRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            portfolio: PortfolioRepository::new(pool.clone()),
            pool,
        }
    }

    /// Get a reference to the underlying database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
