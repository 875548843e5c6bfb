//! API layer for the Media domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::MediaState;
pub use routes::routes;
