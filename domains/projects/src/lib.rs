//! Projects domain: client project intake and status lifecycle

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Project, ProjectStatus, PublicProject};
pub use domain::state::{
    ProjectState, ProjectStateMachine, TransitionOutcome, TransitionRequest,
};
// Re-export repository types
pub use repository::{ProjectChanges, ProjectRepository, ProjectsRepositories};

// Re-export API types
pub use api::routes;
pub use api::ProjectsState;
