//! End-to-end walk of the project lifecycle against the shared state
//! machine and entity apply methods, without a database.

use chrono::Utc;

use atelier_projects::{
    Project, ProjectState, ProjectStateMachine, ProjectStatus, TransitionOutcome,
    TransitionRequest,
};

fn submit_project() -> Project {
    Project::new(
        "Ada Lovelace".to_string(),
        "ada@example.com".to_string(),
        "+44 1234 567890".to_string(),
        Some("Babbage & Co".to_string()),
        "Analytical Engine Site".to_string(),
        "A marketing site for the engine.".to_string(),
        Utc::now(),
        Utc::now(),
    )
    .expect("valid submission")
}

#[test]
fn full_lifecycle_walk() {
    // Created on submission: pending, no lifecycle timestamps.
    let mut project = submit_project();
    assert_eq!(project.status, ProjectStatus::Pending);
    assert!(project.approved_at.is_none());
    assert!(project.completed_at.is_none());

    // Approve succeeds and stamps approved_at.
    project.approve().expect("pending -> approved");
    assert_eq!(project.status, ProjectStatus::Approved);
    let approved_at = project.approved_at.expect("approved_at stamped");

    // Approving again is rejected with the redundant-transition reason.
    let err = project.approve().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error: Cannot transition from approved to approved."
    );
    assert_eq!(project.status, ProjectStatus::Approved);

    // Complete succeeds and stamps completed_at; approved_at untouched.
    project.complete().expect("approved -> completed");
    assert_eq!(project.status, ProjectStatus::Completed);
    assert!(project.completed_at.is_some());
    assert_eq!(project.approved_at, Some(approved_at));

    // Completed is terminal: every further request is rejected.
    for requested in [
        TransitionRequest::Approved,
        TransitionRequest::Completed,
        TransitionRequest::Declined,
    ] {
        assert!(project.request_transition(requested).is_err());
    }
}

#[test]
fn decline_only_from_pending() {
    let project = submit_project();
    assert_eq!(
        project
            .request_transition(TransitionRequest::Declined)
            .unwrap(),
        TransitionOutcome::Delete
    );

    let mut approved = submit_project();
    approved.approve().unwrap();
    let err = approved
        .request_transition(TransitionRequest::Declined)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error: Only pending projects can be declined."
    );
}

#[test]
fn machine_never_skips_a_stage() {
    let err = ProjectStateMachine::request_transition(
        ProjectState::Pending,
        TransitionRequest::Completed,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Cannot transition from pending to completed.");
}

#[test]
fn backward_transitions_are_unrepresentable_on_the_wire() {
    // "pending" is not a transition request: the boundary rejects it
    // before the machine ever sees it.
    assert!(serde_json::from_str::<TransitionRequest>("\"pending\"").is_err());
}
