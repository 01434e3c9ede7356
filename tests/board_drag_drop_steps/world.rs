//! Shared world state for board drag-and-drop BDD scenarios.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use collabworks::notification::RecordingNotifier;
use collabworks::project::{
    adapters::InMemoryWorkspaceStore,
    domain::{Project, ProjectId, ProjectPatch, Task, TaskId, TaskPatch, TaskStatus},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TaskRepository},
    services::{BoardController, BoardError, DragOutcome},
};
use mockable::DefaultClock;
use rstest::fixture;

/// In-memory store that can be told to reject status updates.
#[derive(Clone, Default)]
pub struct FlakyStore {
    pub inner: InMemoryWorkspaceStore,
    reject_status_updates: Arc<AtomicBool>,
}

impl FlakyStore {
    /// Makes every later status update fail.
    pub fn reject_status_updates(&self) {
        self.reject_status_updates.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProjectRepository for FlakyStore {
    async fn list_projects(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.inner.list_projects().await
    }

    async fn find_project(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.inner.find_project(id).await
    }

    async fn insert_project(&self, project: &Project) -> ProjectRepositoryResult<()> {
        self.inner.insert_project(project).await
    }

    async fn update_project(
        &self,
        id: ProjectId,
        patch: &ProjectPatch,
        updated_at: DateTime<Utc>,
    ) -> ProjectRepositoryResult<Project> {
        self.inner.update_project(id, patch, updated_at).await
    }

    async fn delete_project(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        self.inner.delete_project(id).await
    }
}

#[async_trait]
impl TaskRepository for FlakyStore {
    async fn list_tasks(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Task>> {
        self.inner.list_tasks(project_id).await
    }

    async fn find_task(&self, id: TaskId) -> ProjectRepositoryResult<Option<Task>> {
        self.inner.find_task(id).await
    }

    async fn insert_task(&self, task: &Task) -> ProjectRepositoryResult<()> {
        self.inner.insert_task(task).await
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> ProjectRepositoryResult<Task> {
        self.inner.update_task(id, patch).await
    }

    async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> ProjectRepositoryResult<()> {
        if self.reject_status_updates.load(Ordering::SeqCst) {
            return Err(ProjectRepositoryError::persistence(io::Error::other(
                "connection reset",
            )));
        }
        self.inner.update_task_status(id, status).await
    }

    async fn delete_task(&self, id: TaskId) -> ProjectRepositoryResult<()> {
        self.inner.delete_task(id).await
    }
}

/// Board controller type used by the BDD world.
pub type TestBoard = BoardController<FlakyStore, RecordingNotifier, DefaultClock>;

/// Scenario world for board drag-and-drop behaviour tests.
pub struct BoardWorld {
    pub store: FlakyStore,
    pub notifier: Arc<RecordingNotifier>,
    pub board: Option<TestBoard>,
    pub last_drag: Option<Result<DragOutcome, BoardError>>,
}

impl BoardWorld {
    /// Creates a world with an empty store and no open board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: FlakyStore::default(),
            notifier: Arc::new(RecordingNotifier::new()),
            board: None,
            last_drag: None,
        }
    }

    /// Returns the open board.
    ///
    /// # Errors
    ///
    /// Returns an error when no board has been opened yet.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing open board in scenario world"))
    }

    /// Finds a task on the open board by title.
    ///
    /// # Errors
    ///
    /// Returns an error when no board is open or no task has that title.
    pub fn task_named(&self, title: &str) -> Result<Task, eyre::Report> {
        self.board()?
            .project()
            .tasks()
            .iter()
            .find(|task| task.title().as_str() == title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
