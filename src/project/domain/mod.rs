//! Domain model for projects and their task boards.
//!
//! Records here carry no infrastructure concerns. Validation happens when
//! values are built from user input ([`Title::new`], [`TaskPatch::validate`]),
//! so nothing invalid reaches a repository.

mod drag;
mod error;
mod fingerprint;
mod ids;
mod project;
mod status;
mod summary;
mod task;

pub use drag::{DragResult, DropLocation, StatusMove};
pub use error::{ParsePriorityError, ParseTaskStatusError, ProjectDomainError};
pub use fingerprint::BoardFingerprint;
pub use ids::{ProjectId, TaskId, Title};
pub use project::{PersistedProjectData, Project, ProjectDraft, ProjectPatch, ProjectProgress};
pub use status::{Priority, TaskStatus};
pub use summary::WorkspaceSummary;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch};
