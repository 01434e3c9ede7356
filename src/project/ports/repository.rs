//! Repository ports for the hosted `projects` and `tasks` tables.

use crate::project::domain::{Project, ProjectId, ProjectPatch, Task, TaskId, TaskPatch, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for project and task repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Projects come back with their tasks attached.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every project, newest first.
    async fn list_projects(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_project(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Stores a new project. Its task list is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the id is
    /// already taken.
    async fn insert_project(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Applies a metadata patch and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::ProjectNotFound`] when the project
    /// does not exist.
    async fn update_project(
        &self,
        id: ProjectId,
        patch: &ProjectPatch,
        updated_at: DateTime<Utc>,
    ) -> ProjectRepositoryResult<Project>;

    /// Deletes a project together with all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::ProjectNotFound`] when the project
    /// does not exist.
    async fn delete_project(&self, id: ProjectId) -> ProjectRepositoryResult<()>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns the tasks of one project, newest first.
    async fn list_tasks(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: TaskId) -> ProjectRepositoryResult<Option<Task>>;

    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::ProjectNotFound`] when the owning
    /// project does not exist, or [`ProjectRepositoryError::DuplicateTask`]
    /// when the id is already taken.
    async fn insert_task(&self, task: &Task) -> ProjectRepositoryResult<()>;

    /// Applies a partial update and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> ProjectRepositoryResult<Task>;

    /// Moves a task to another column.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> ProjectRepositoryResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn delete_task(&self, id: TaskId) -> ProjectRepositoryResult<()>;
}

/// Errors returned by project and task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The project was not found.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
