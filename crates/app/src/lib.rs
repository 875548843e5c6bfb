//! Atelier application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

use atelier_accounts::{AccountsRepositories, AccountsState};
use atelier_auth::{AuthBackend, AuthConfig};
use atelier_blogs::{BlogsRepositories, BlogsState};
use atelier_common::Config;
use atelier_email::{EmailConfig, EmailServiceFactory};
use atelier_media::MediaState;
use atelier_portfolio::{PortfolioRepositories, PortfolioState};
use atelier_projects::{ProjectsRepositories, ProjectsState};
use atelier_storage::{StorageConfig, StorageServiceFactory};

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Auth backend shared by every domain
    let auth_config = AuthConfig::from_env()?;
    let auth = AuthBackend::new(pool.clone(), auth_config);

    // Collaborators from environment
    let email_config = EmailConfig::from_env()?;
    let email = Arc::from(EmailServiceFactory::create(email_config).await?);

    let storage_config = StorageConfig::from_env()?;
    let storage = Arc::from(StorageServiceFactory::create(storage_config).await?);

    // Domain states
    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let projects_state = ProjectsState {
        repos: ProjectsRepositories::new(pool.clone()),
        auth: auth.clone(),
        email,
        notify_email: config.notify_email.clone(),
    };

    let blogs_state = BlogsState {
        repos: BlogsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let portfolio_state = PortfolioState {
        repos: PortfolioRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let media_state = MediaState { storage, auth };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Atelier API v0.1.0" }))
        .merge(atelier_accounts::routes().with_state(accounts_state))
        .merge(atelier_projects::routes().with_state(projects_state))
        .merge(atelier_blogs::routes().with_state(blogs_state))
        .merge(atelier_portfolio::routes().with_state(portfolio_state))
        .merge(atelier_media::routes().with_state(media_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
