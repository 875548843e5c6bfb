//! Shared database helpers for Atelier
//!
//! Domain repositories convert driver errors into the common [`Error`]
//! automatically via `#[from]`; this module holds the few checks that need
//! to look inside a `sqlx::Error` first.

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Whether this driver error is a unique-constraint violation.
///
/// Repositories use this to translate duplicate inserts (blog titles,
/// account emails) into a 409 Conflict instead of a 500.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}
