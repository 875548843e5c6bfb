//! Route definitions for the Portfolio domain API

use axum::{routing::get, Router};

use super::handlers::portfolio;
use super::middleware::PortfolioState;

/// Create all Portfolio domain API routes
pub fn routes() -> Router<PortfolioState> {
    Router::new().route(
        "/api/portfolio",
        get(portfolio::list_portfolio).post(portfolio::create_portfolio_project),
    )
}
