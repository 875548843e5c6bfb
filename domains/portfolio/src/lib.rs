//! Portfolio domain: hand-curated showcase entries
//!
//! Distinct from completed intake projects: these are entries the site
//! owner adds directly, with their own links and tags.

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::PortfolioProject;
// Re-export repository types
pub use repository::{PortfolioRepository, PortfolioRepositories};

// Re-export API types
pub use api::routes;
pub use api::PortfolioState;
