//! Board state controller for one open project.
//!
//! Every write follows the same pattern: mutate local state first so
//! subscribers see the change immediately, then issue the remote call. When
//! the remote call fails the controller re-reads the project from the store,
//! replaces local state wholesale and reports a destructive toast.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use mockable::Clock;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::DEFAULT_STATUS_TOAST;
use crate::navigation::Route;
use crate::notification::{Notifier, Toast};
use crate::project::{
    domain::{
        BoardFingerprint, DragResult, Priority, Project, ProjectDomainError, ProjectId,
        ProjectPatch, ProjectProgress, StatusMove, Task, TaskDraft, TaskId, TaskPatch,
        TaskStatus, Title,
    },
    ports::{ProjectRepository, ProjectRepositoryError, TaskRepository},
};

/// Errors returned by board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Input failed validation. Nothing was changed and no remote call was
    /// made.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),

    /// A read from the store failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),

    /// A remote write failed. Local state was re-read from the store when
    /// `reconciled` is `true`.
    #[error("remote write failed: {source}")]
    Remote {
        /// Failure reported by the store.
        source: ProjectRepositoryError,
        /// Whether the follow-up re-fetch replaced local state.
        reconciled: bool,
    },

    /// The project no longer exists. Also returned in place of
    /// [`BoardError::Remote`] when a failed write finds the project gone.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task is not on this board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

impl BoardError {
    /// Returns the route a caller should navigate to, if the error calls for
    /// leaving the board.
    #[must_use]
    pub const fn redirect(&self) -> Option<Route> {
        match self {
            Self::ProjectNotFound(_) => Some(Route::Dashboard),
            _ => None,
        }
    }
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Input for a new task on the open board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
    image: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request for a to-do task with medium priority.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: None,
            image: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial column.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Attaches an image.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    fn into_draft(self, project_id: ProjectId) -> Result<TaskDraft, ProjectDomainError> {
        let mut draft = TaskDraft::new(project_id, Title::new(self.title)?)
            .with_status(self.status)
            .with_priority(self.priority);
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(due_date) = self.due_date {
            draft = draft.with_due_date(due_date);
        }
        if let Some(image) = self.image {
            draft = draft.with_image(image);
        }
        Ok(draft)
    }
}

/// One column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    /// Status the column stands for; also its droppable identifier.
    pub status: TaskStatus,
    /// Column heading.
    pub title: &'static str,
    /// Tasks in the column, newest first.
    pub tasks: Vec<Task>,
}

/// What a drag release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The release was a no-op.
    Ignored,
    /// The release moved a task.
    Moved(StatusMove),
}

/// Result of re-reading the project from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Whether the stored tasks differed from local state.
    pub diverged: bool,
}

struct Failure {
    title: &'static str,
    description: &'static str,
}

const PROJECT_MISSING: Failure = Failure {
    title: "Project not found",
    description: "The requested project could not be found.",
};
const MOVE_FAILED: Failure = Failure {
    title: "Error updating task",
    description: "There was a problem updating the task status.",
};
const UPDATE_FAILED: Failure = Failure {
    title: "Error updating task",
    description: "There was a problem updating the task.",
};
const DELETE_FAILED: Failure = Failure {
    title: "Error deleting task",
    description: "There was a problem deleting the task.",
};
const CREATE_FAILED: Failure = Failure {
    title: "Error creating task",
    description: "There was a problem creating the task.",
};
const PROJECT_UPDATE_FAILED: Failure = Failure {
    title: "Error updating project",
    description: "There was a problem updating the project.",
};
const PROJECT_DELETE_FAILED: Failure = Failure {
    title: "Error deleting project",
    description: "There was a problem deleting the project.",
};

/// Holds the open project and keeps it consistent with the store.
///
/// All operations take `&self`; state lives in a [`watch`] channel so an
/// `Arc<BoardController>` can be shared with whatever renders the board.
pub struct BoardController<R, N, C>
where
    R: ProjectRepository + TaskRepository,
    N: Notifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
    state: watch::Sender<Project>,
    status_toast_duration: Duration,
}

impl<R, N, C> BoardController<R, N, C>
where
    R: ProjectRepository + TaskRepository,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a controller around an already loaded project.
    #[must_use]
    pub fn new(repository: Arc<R>, notifier: Arc<N>, clock: Arc<C>, project: Project) -> Self {
        let (state, _) = watch::channel(project);
        Self {
            repository,
            notifier,
            clock,
            state,
            status_toast_duration: DEFAULT_STATUS_TOAST,
        }
    }

    /// Loads a project from the store and opens it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ProjectNotFound`] when the project does not
    /// exist, or [`BoardError::Repository`] when the store cannot be read.
    /// Both raise a destructive toast.
    pub async fn open(
        repository: Arc<R>,
        notifier: Arc<N>,
        clock: Arc<C>,
        id: ProjectId,
    ) -> BoardResult<Self> {
        match repository.find_project(id).await {
            Ok(Some(project)) => {
                debug!(project_id = %id, tasks = project.tasks().len(), "board opened");
                Ok(Self::new(repository, notifier, clock, project))
            }
            Ok(None) => {
                warn!(project_id = %id, "project not found");
                notifier.notify(Toast::destructive(
                    PROJECT_MISSING.title,
                    PROJECT_MISSING.description,
                ));
                Err(BoardError::ProjectNotFound(id))
            }
            Err(err) => {
                error!(project_id = %id, error = %err, "error loading project");
                notifier.notify(Toast::destructive(
                    "Error loading project",
                    "There was a problem loading the project details.",
                ));
                Err(err.into())
            }
        }
    }

    /// Overrides how long the status-change toast stays visible.
    #[must_use]
    pub fn with_status_toast_duration(mut self, duration: Duration) -> Self {
        self.status_toast_duration = duration;
        self
    }

    /// Returns a snapshot of local state.
    #[must_use]
    pub fn project(&self) -> Project {
        self.state.borrow().clone()
    }

    /// Subscribes to local state. Every optimistic write and every
    /// reconciliation is published.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Project> {
        self.state.subscribe()
    }

    /// Returns the three columns in board order.
    #[must_use]
    pub fn columns(&self) -> Vec<BoardColumn> {
        let project = self.state.borrow();
        TaskStatus::ALL
            .into_iter()
            .map(|status| BoardColumn {
                status,
                title: status.column_title(),
                tasks: project.column(status).into_iter().cloned().collect(),
            })
            .collect()
    }

    /// Returns completion figures for local state.
    #[must_use]
    pub fn progress(&self) -> ProjectProgress {
        self.state.borrow().progress()
    }

    fn project_id(&self) -> ProjectId {
        self.state.borrow().id()
    }

    /// Moves a task to another column.
    ///
    /// Local state changes before the remote call is issued.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when the task is not on the board
    /// (no remote call is made), or [`BoardError::Remote`] when the store
    /// rejects the update.
    pub async fn move_task(&self, task_id: TaskId, status: TaskStatus) -> BoardResult<()> {
        let mut moved = None;
        self.state.send_if_modified(|project| {
            moved = project.move_task(task_id, status);
            moved.is_some()
        });
        let Some(title) = moved else {
            warn!(task_id = %task_id, "move requested for a task not on the board");
            return Err(BoardError::TaskNotFound(task_id));
        };

        self.notifier.notify(
            Toast::new("Task Updated")
                .with_description(format!("\"{title}\" moved to {}", status.label()))
                .with_duration(self.status_toast_duration),
        );

        debug!(task_id = %task_id, status = %status, "updating task status");
        match self.repository.update_task_status(task_id, status).await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.recover(err, &MOVE_FAILED).await),
        }
    }

    /// Applies a partial update to a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for a blank title,
    /// [`BoardError::TaskNotFound`] when the task is not on the board, or
    /// [`BoardError::Remote`] when the store rejects the update.
    pub async fn update_task(&self, task_id: TaskId, patch: TaskPatch) -> BoardResult<()> {
        if let Err(err) = patch.validate() {
            self.notifier.notify(Toast::destructive(
                "Task title required",
                "Please enter a title for your task",
            ));
            return Err(err.into());
        }

        let mut applied = Ok(false);
        self.state.send_if_modified(|project| {
            applied = project.apply_task_patch(task_id, &patch);
            matches!(applied, Ok(true))
        });
        if !applied? {
            return Err(BoardError::TaskNotFound(task_id));
        }

        debug!(task_id = %task_id, "updating task");
        match self.repository.update_task(task_id, &patch).await {
            Ok(task) => {
                self.notifier.notify(
                    Toast::new("Task updated")
                        .with_description(format!("\"{}\" has been updated", task.title())),
                );
                Ok(())
            }
            Err(err) => Err(self.recover(err, &UPDATE_FAILED).await),
        }
    }

    /// Removes a task from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when the task is not on the board,
    /// or [`BoardError::Remote`] when the store rejects the delete.
    pub async fn delete_task(&self, task_id: TaskId) -> BoardResult<()> {
        let mut removed = None;
        self.state.send_if_modified(|project| {
            removed = project.remove_task(task_id);
            removed.is_some()
        });
        let Some(task) = removed else {
            return Err(BoardError::TaskNotFound(task_id));
        };

        debug!(task_id = %task_id, "deleting task");
        match self.repository.delete_task(task_id).await {
            Ok(()) => {
                self.notifier.notify(
                    Toast::new("Task deleted")
                        .with_description(format!("\"{}\" has been deleted", task.title())),
                );
                Ok(())
            }
            Err(err) => Err(self.recover(err, &DELETE_FAILED).await),
        }
    }

    /// Creates a task on the board.
    ///
    /// The task is appended locally once the store accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for a blank title, or
    /// [`BoardError::Remote`] when the store rejects the insert.
    pub async fn create_task(&self, request: CreateTaskRequest) -> BoardResult<Task> {
        let draft = match request.into_draft(self.project_id()) {
            Ok(draft) => draft,
            Err(err) => {
                self.notifier.notify(Toast::destructive(
                    "Task title required",
                    "Please enter a title for your task",
                ));
                return Err(err.into());
            }
        };
        let task = Task::new(draft, &*self.clock);

        debug!(task_id = %task.id(), project_id = %task.project_id(), "creating task");
        if let Err(err) = self.repository.insert_task(&task).await {
            return Err(self.recover(err, &CREATE_FAILED).await);
        }
        self.state.send_modify(|project| project.push_task(task.clone()));
        self.notifier.notify(
            Toast::new("Task created")
                .with_description(format!("\"{}\" has been added to the project", task.title())),
        );
        Ok(task)
    }

    /// Updates project metadata.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for a blank title, or
    /// [`BoardError::Remote`] when the store rejects the update.
    pub async fn update_project(&self, patch: ProjectPatch) -> BoardResult<()> {
        if let Err(err) = patch.validate() {
            self.notifier.notify(Toast::destructive(
                "Project title required",
                "Please enter a title for your project",
            ));
            return Err(err.into());
        }

        let updated_at = self.clock.utc();
        let mut applied = Ok(());
        self.state.send_if_modified(|project| {
            applied = project.apply_patch(&patch, updated_at);
            applied.is_ok()
        });
        applied?;

        let id = self.project_id();
        debug!(project_id = %id, "updating project");
        match self.repository.update_project(id, &patch, updated_at).await {
            Ok(project) => {
                self.notifier.notify(
                    Toast::new("Project updated")
                        .with_description(format!("\"{}\" has been updated", project.title())),
                );
                Ok(())
            }
            Err(err) => Err(self.recover(err, &PROJECT_UPDATE_FAILED).await),
        }
    }

    /// Deletes the open project together with its tasks.
    ///
    /// Nothing changes locally until the store confirms. Returns the route
    /// to leave the board for.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Remote`] when the store rejects the delete.
    pub async fn delete_project(&self) -> BoardResult<Route> {
        let id = self.project_id();
        let title = self.state.borrow().title().clone();
        info!(project_id = %id, "deleting project");
        match self.repository.delete_project(id).await {
            Ok(()) => {
                self.notifier.notify(
                    Toast::new("Project deleted")
                        .with_description(format!("\"{title}\" has been deleted")),
                );
                Ok(Route::Dashboard)
            }
            Err(err) => Err(self.recover(err, &PROJECT_DELETE_FAILED).await),
        }
    }

    /// Handles a drag release from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the release names an unknown
    /// column or a malformed task id, otherwise the errors of
    /// [`BoardController::move_task`].
    pub async fn on_drag_end(&self, result: &DragResult) -> BoardResult<DragOutcome> {
        let Some(status_move) = result.resolve()? else {
            debug!(draggable_id = %result.draggable_id, "drag ignored");
            return Ok(DragOutcome::Ignored);
        };
        self.move_task(status_move.task_id, status_move.status).await?;
        Ok(DragOutcome::Moved(status_move))
    }

    /// Replaces local state with the project as stored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ProjectNotFound`] when the project was deleted
    /// remotely, or [`BoardError::Repository`] when the store cannot be read.
    /// Local state is left as it was in both cases.
    pub async fn reconcile(&self) -> BoardResult<ReconcileOutcome> {
        let id = self.project_id();
        let Some(remote) = self.repository.find_project(id).await? else {
            return Err(BoardError::ProjectNotFound(id));
        };
        let local = self.state.send_replace(remote.clone());
        let diverged = match (
            BoardFingerprint::of(local.tasks()),
            BoardFingerprint::of(remote.tasks()),
        ) {
            (Ok(before), Ok(after)) => {
                debug!(project_id = %id, local = %before, remote = %after, "board fingerprints");
                before != after
            }
            _ => true,
        };
        info!(project_id = %id, diverged, "board reconciled");
        Ok(ReconcileOutcome { diverged })
    }

    async fn recover(&self, source: ProjectRepositoryError, failure: &Failure) -> BoardError {
        error!(
            project_id = %self.project_id(),
            error = %source,
            "{}",
            failure.title
        );
        let reconciled = match self.reconcile().await {
            Ok(_) => true,
            Err(BoardError::ProjectNotFound(id)) => {
                warn!(project_id = %id, "project removed while the board was open");
                self.notifier.notify(Toast::destructive(
                    PROJECT_MISSING.title,
                    PROJECT_MISSING.description,
                ));
                return BoardError::ProjectNotFound(id);
            }
            Err(err) => {
                error!(error = %err, "reconciliation failed");
                false
            }
        };
        self.notifier.notify(Toast::destructive(failure.title, failure.description));
        BoardError::Remote { source, reconciled }
    }
}
