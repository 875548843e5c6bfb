//! API layer for the Blogs domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::BlogsState;
pub use routes::routes;
