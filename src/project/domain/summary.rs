//! Dashboard figures across every project.

use super::{Project, ProjectProgress};
use serde::Serialize;

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkspaceSummary {
    /// Number of projects.
    pub projects: usize,
    /// Task tallies over all projects.
    pub tasks: ProjectProgress,
}

impl WorkspaceSummary {
    /// Aggregates the given projects.
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            projects: projects.len(),
            tasks: ProjectProgress::from_tasks(projects.iter().flat_map(Project::tasks)),
        }
    }
}
