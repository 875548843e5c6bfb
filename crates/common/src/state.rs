//! Common state machine error types
//!
//! Shared by domain crates that implement lifecycle state machines. A
//! rejection is policy feedback for the caller, not a fault: these errors
//! carry the human-readable reason surfaced in 400 responses.

use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Cannot transition from {from} to {to}.")]
    InvalidTransition { from: String, to: String },

    #[error("Only pending projects can be declined.")]
    DeclineNotPending,
}

impl From<StateError> for crate::error::Error {
    fn from(err: StateError) -> Self {
        crate::error::Error::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = StateError::InvalidTransition {
            from: "approved".to_string(),
            to: "pending".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot transition from approved to pending.");
    }

    #[test]
    fn test_decline_not_pending_message() {
        assert_eq!(
            StateError::DeclineNotPending.to_string(),
            "Only pending projects can be declined."
        );
    }

    #[test]
    fn test_state_error_maps_to_validation() {
        let err: crate::error::Error = StateError::DeclineNotPending.into();
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::BAD_REQUEST
        );
    }
}
