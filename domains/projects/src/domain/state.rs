//! Project status state machine
//!
//! The single authoritative transition table for the project lifecycle,
//! consumed by the route layer and the entity apply methods. The machine
//! is a pure decision function: it never touches storage or stamps
//! timestamps itself.
//!
//! Lifecycle: `pending → approved → completed`, strictly forward. A
//! `declined` request is only honored for pending projects and results in
//! deletion of the record rather than a stored state.

use serde::{Deserialize, Serialize};

use atelier_common::StateError;

/// Stored project status states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectState {
    Pending,
    Approved,
    Completed,
}

impl ProjectState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [ProjectState] {
        match self {
            Self::Pending => &[Self::Approved],
            Self::Approved => &[Self::Completed],
            Self::Completed => &[],
        }
    }
}

impl std::fmt::Display for ProjectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Requested transitions accepted on the status endpoint.
///
/// `declined` is a request value, never a stored state. Any other wire
/// value fails deserialization at the boundary, so invalid input is
/// unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionRequest {
    Approved,
    Completed,
    Declined,
}

impl std::fmt::Display for TransitionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Completed => write!(f, "completed"),
            Self::Declined => write!(f, "declined"),
        }
    }
}

/// Decision produced by the state machine for an allowed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Advance to the given state; the caller persists the change and
    /// stamps the matching timestamp exactly once.
    Apply(ProjectState),
    /// Delete the record entirely (successful decline).
    Delete,
}

/// Project state machine
pub struct ProjectStateMachine;

impl ProjectStateMachine {
    /// Decide the outcome of a requested transition.
    ///
    /// Returns the outcome if the request is allowed, or a [`StateError`]
    /// carrying the rejection reason otherwise. A request equal to the
    /// current state is always rejected, never a silent success.
    pub fn request_transition(
        current: ProjectState,
        requested: TransitionRequest,
    ) -> Result<TransitionOutcome, StateError> {
        // Decline is its own branch: only pending projects can be
        // declined, and a successful decline deletes the record.
        if requested == TransitionRequest::Declined {
            return match current {
                ProjectState::Pending => Ok(TransitionOutcome::Delete),
                _ => Err(StateError::DeclineNotPending),
            };
        }

        let target = match requested {
            TransitionRequest::Approved => ProjectState::Approved,
            TransitionRequest::Completed => ProjectState::Completed,
            TransitionRequest::Declined => unreachable!("handled above"),
        };

        if current.valid_transitions().contains(&target) {
            Ok(TransitionOutcome::Apply(target))
        } else {
            Err(StateError::InvalidTransition {
                from: current.to_string(),
                to: target.to_string(),
            })
        }
    }

    /// Check if a request would be allowed without deciding it
    pub fn can_transition(current: ProjectState, requested: TransitionRequest) -> bool {
        Self::request_transition(current, requested).is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod project_state_machine {
        use super::*;

        #[test]
        fn test_pending_to_approved() {
            let result = ProjectStateMachine::request_transition(
                ProjectState::Pending,
                TransitionRequest::Approved,
            );
            assert_eq!(result, Ok(TransitionOutcome::Apply(ProjectState::Approved)));
        }

        #[test]
        fn test_approved_to_completed() {
            let result = ProjectStateMachine::request_transition(
                ProjectState::Approved,
                TransitionRequest::Completed,
            );
            assert_eq!(
                result,
                Ok(TransitionOutcome::Apply(ProjectState::Completed))
            );
        }

        #[test]
        fn test_pending_declined_deletes() {
            let result = ProjectStateMachine::request_transition(
                ProjectState::Pending,
                TransitionRequest::Declined,
            );
            assert_eq!(result, Ok(TransitionOutcome::Delete));
        }

        #[test]
        fn test_approved_declined_rejected() {
            let result = ProjectStateMachine::request_transition(
                ProjectState::Approved,
                TransitionRequest::Declined,
            );
            assert_eq!(result, Err(StateError::DeclineNotPending));
            assert_eq!(
                result.unwrap_err().to_string(),
                "Only pending projects can be declined."
            );
        }

        #[test]
        fn test_completed_declined_rejected() {
            let result = ProjectStateMachine::request_transition(
                ProjectState::Completed,
                TransitionRequest::Declined,
            );
            assert_eq!(result, Err(StateError::DeclineNotPending));
        }

        #[test]
        fn test_pending_cannot_skip_to_completed() {
            let result = ProjectStateMachine::request_transition(
                ProjectState::Pending,
                TransitionRequest::Completed,
            );
            assert_eq!(
                result,
                Err(StateError::InvalidTransition {
                    from: "pending".to_string(),
                    to: "completed".to_string(),
                })
            );
        }

        #[test]
        fn test_completed_rejects_every_request() {
            for requested in [
                TransitionRequest::Approved,
                TransitionRequest::Completed,
                TransitionRequest::Declined,
            ] {
                let result =
                    ProjectStateMachine::request_transition(ProjectState::Completed, requested);
                assert!(result.is_err(), "completed must reject {}", requested);
            }
        }

        #[test]
        fn test_redundant_request_rejected_not_silent() {
            let result = ProjectStateMachine::request_transition(
                ProjectState::Approved,
                TransitionRequest::Approved,
            );
            assert_eq!(
                result.unwrap_err().to_string(),
                "Cannot transition from approved to approved."
            );

            let result = ProjectStateMachine::request_transition(
                ProjectState::Completed,
                TransitionRequest::Completed,
            );
            assert_eq!(
                result.unwrap_err().to_string(),
                "Cannot transition from completed to completed."
            );
        }

        #[test]
        fn test_no_backward_transition() {
            let result = ProjectStateMachine::request_transition(
                ProjectState::Completed,
                TransitionRequest::Approved,
            );
            assert_eq!(
                result.unwrap_err().to_string(),
                "Cannot transition from completed to approved."
            );
        }

        #[test]
        fn test_all_disallowed_pairs_reject() {
            // Every (current, requested) pair outside the allowed set rejects.
            let allowed = [
                (ProjectState::Pending, TransitionRequest::Approved),
                (ProjectState::Pending, TransitionRequest::Declined),
                (ProjectState::Approved, TransitionRequest::Completed),
            ];
            for current in [
                ProjectState::Pending,
                ProjectState::Approved,
                ProjectState::Completed,
            ] {
                for requested in [
                    TransitionRequest::Approved,
                    TransitionRequest::Completed,
                    TransitionRequest::Declined,
                ] {
                    let result = ProjectStateMachine::request_transition(current, requested);
                    if allowed.contains(&(current, requested)) {
                        assert!(result.is_ok(), "{} + {} should pass", current, requested);
                    } else {
                        assert!(result.is_err(), "{} + {} should reject", current, requested);
                    }
                }
            }
        }

        #[test]
        fn test_is_terminal() {
            assert!(!ProjectState::Pending.is_terminal());
            assert!(!ProjectState::Approved.is_terminal());
            assert!(ProjectState::Completed.is_terminal());
        }

        #[test]
        fn test_valid_transitions_table() {
            assert_eq!(
                ProjectState::Pending.valid_transitions(),
                &[ProjectState::Approved]
            );
            assert_eq!(
                ProjectState::Approved.valid_transitions(),
                &[ProjectState::Completed]
            );
            assert!(ProjectState::Completed.valid_transitions().is_empty());
        }

        #[test]
        fn test_can_transition() {
            assert!(ProjectStateMachine::can_transition(
                ProjectState::Pending,
                TransitionRequest::Approved
            ));
            assert!(ProjectStateMachine::can_transition(
                ProjectState::Pending,
                TransitionRequest::Declined
            ));
            assert!(!ProjectStateMachine::can_transition(
                ProjectState::Pending,
                TransitionRequest::Completed
            ));
            assert!(!ProjectStateMachine::can_transition(
                ProjectState::Completed,
                TransitionRequest::Declined
            ));
        }

        #[test]
        fn test_transition_request_wire_format() {
            // Lowercase wire values round-trip; anything else fails to parse.
            let parsed: TransitionRequest = serde_json::from_str("\"declined\"").unwrap();
            assert_eq!(parsed, TransitionRequest::Declined);
            assert!(serde_json::from_str::<TransitionRequest>("\"pending\"").is_err());
            assert!(serde_json::from_str::<TransitionRequest>("\"Approved\"").is_err());
        }
    }
}
