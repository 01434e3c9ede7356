//! Project catalog: the dashboard's list of projects.

use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, error, info};

use super::board::{BoardController, BoardResult};
use crate::auth::ports::{AuthProvider, AuthProviderError};
use crate::config::DEFAULT_STATUS_TOAST;
use crate::notification::{Notifier, Toast};
use crate::project::{
    domain::{Project, ProjectDomainError, ProjectDraft, ProjectId, Title, WorkspaceSummary},
    ports::{ProjectRepository, ProjectRepositoryError, TaskRepository},
};

/// Input for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    title: String,
    description: Option<String>,
    cover_image: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            cover_image: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the cover image.
    #[must_use]
    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }
}

/// Service-level errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),
    /// The store rejected the operation.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// The session lookup failed.
    #[error(transparent)]
    Auth(#[from] AuthProviderError),
    /// Creating a project needs a signed-in user.
    #[error("user not authenticated")]
    Unauthenticated,
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Lists, creates and deletes projects, and opens boards.
#[derive(Clone)]
pub struct ProjectCatalogService<R, A, N, C>
where
    R: ProjectRepository + TaskRepository,
    A: AuthProvider,
    N: Notifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    auth: Arc<A>,
    notifier: Arc<N>,
    clock: Arc<C>,
    status_toast_duration: Duration,
}

impl<R, A, N, C> ProjectCatalogService<R, A, N, C>
where
    R: ProjectRepository + TaskRepository,
    A: AuthProvider,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, auth: Arc<A>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repository,
            auth,
            notifier,
            clock,
            status_toast_duration: DEFAULT_STATUS_TOAST,
        }
    }

    /// Sets the status-change toast duration passed on to opened boards.
    #[must_use]
    pub fn with_status_toast_duration(mut self, duration: Duration) -> Self {
        self.status_toast_duration = duration;
        self
    }

    /// Returns every project with its tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Repository`] when the store cannot be read.
    pub async fn list_projects(&self) -> CatalogResult<Vec<Project>> {
        match self.repository.list_projects().await {
            Ok(projects) => {
                debug!(count = projects.len(), "projects loaded");
                Ok(projects)
            }
            Err(err) => {
                error!(error = %err, "error loading projects");
                self.notifier.notify(Toast::destructive(
                    "Error loading projects",
                    "There was a problem loading your projects.",
                ));
                Err(err.into())
            }
        }
    }

    /// Filters projects by a case-insensitive substring of title or
    /// description. An empty query keeps everything.
    #[must_use]
    pub fn search<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|project| project.matches_query(query))
            .collect()
    }

    /// Returns dashboard figures for the given projects.
    #[must_use]
    pub fn summary(projects: &[Project]) -> WorkspaceSummary {
        WorkspaceSummary::from_projects(projects)
    }

    /// Creates a project owned by the signed-in user.
    ///
    /// The new project has no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] for a blank title,
    /// [`CatalogError::Unauthenticated`] when nobody is signed in, or
    /// [`CatalogError::Repository`] when the store rejects the insert.
    pub async fn create_project(&self, request: CreateProjectRequest) -> CatalogResult<Project> {
        let title = match Title::new(request.title) {
            Ok(title) => title,
            Err(err) => {
                self.notifier.notify(Toast::destructive(
                    "Project title required",
                    "Please enter a title for your project",
                ));
                return Err(err.into());
            }
        };

        match self.insert_project(title, request.description, request.cover_image).await {
            Ok(project) => {
                info!(project_id = %project.id(), "project created");
                self.notifier.notify(Toast::new("Project created").with_description(format!(
                    "\"{}\" has been successfully created",
                    project.title()
                )));
                Ok(project)
            }
            Err(err) => {
                error!(error = %err, "error creating project");
                self.notifier.notify(Toast::destructive(
                    "Error creating project",
                    "There was a problem creating your project.",
                ));
                Err(err)
            }
        }
    }

    async fn insert_project(
        &self,
        title: Title,
        description: Option<String>,
        cover_image: Option<String>,
    ) -> CatalogResult<Project> {
        let session = self
            .auth
            .current_session()
            .await?
            .ok_or(CatalogError::Unauthenticated)?;
        let mut draft = ProjectDraft::new(title, session.user.id);
        if let Some(description) = description {
            draft = draft.with_description(description);
        }
        if let Some(cover_image) = cover_image {
            draft = draft.with_cover_image(cover_image);
        }
        let project = Project::new(draft, &*self.clock);
        self.repository.insert_project(&project).await?;
        Ok(project)
    }

    /// Deletes a project and all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Repository`] when the store rejects the
    /// delete.
    pub async fn delete_project(&self, id: ProjectId) -> CatalogResult<()> {
        if let Err(err) = self.repository.delete_project(id).await {
            error!(project_id = %id, error = %err, "error deleting project");
            self.notifier.notify(Toast::destructive(
                "Error deleting project",
                "There was a problem deleting the project.",
            ));
            return Err(err.into());
        }
        info!(project_id = %id, "project deleted");
        Ok(())
    }

    /// Loads a project into a board controller.
    ///
    /// # Errors
    ///
    /// See [`BoardController::open`].
    pub async fn open_board(&self, id: ProjectId) -> BoardResult<BoardController<R, N, C>> {
        BoardController::open(
            Arc::clone(&self.repository),
            Arc::clone(&self.notifier),
            Arc::clone(&self.clock),
            id,
        )
        .await
        .map(|board| board.with_status_toast_duration(self.status_toast_duration))
    }
}
