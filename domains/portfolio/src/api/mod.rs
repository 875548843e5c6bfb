//! API layer for the Portfolio domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::PortfolioState;
pub use routes::routes;
