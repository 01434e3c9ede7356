//! Project aggregate root owning its tasks.

use super::task::non_blank;
use super::{ProjectDomainError, ProjectId, Task, TaskId, TaskPatch, TaskStatus, Title};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project aggregate root.
///
/// Tasks are kept newest first, the order the store returns them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: Title,
    description: Option<String>,
    cover_image: Option<String>,
    created_by: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tasks: Vec<Task>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted cover image, if any.
    pub cover_image: Option<String>,
    /// User who created the project, if recorded.
    pub created_by: Option<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Tasks belonging to the project.
    pub tasks: Vec<Task>,
}

/// Validated input for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    title: Title,
    description: Option<String>,
    cover_image: Option<String>,
    created_by: UserId,
}

impl ProjectDraft {
    /// Creates a draft owned by `created_by`.
    #[must_use]
    pub const fn new(title: Title, created_by: UserId) -> Self {
        Self {
            title,
            description: None,
            cover_image: None,
            created_by,
        }
    }

    /// Sets the description. Blank text is dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
        self
    }

    /// Sets the cover image. Blank text is dropped.
    #[must_use]
    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = non_blank(cover_image.into());
        self
    }
}

/// Partial update of project metadata.
///
/// `None` leaves a field untouched; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPatch {
    title: Option<String>,
    description: Option<Option<String>>,
    cover_image: Option<Option<String>>,
}

impl ProjectPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces or clears the description. Blank text clears it.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description.and_then(non_blank));
        self
    }

    /// Replaces or clears the cover image.
    #[must_use]
    pub fn with_cover_image(mut self, cover_image: Option<String>) -> Self {
        self.cover_image = Some(cover_image.and_then(non_blank));
        self
    }

    /// Checks the patch before it is applied anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTitle`] when the patch sets a blank
    /// title.
    pub fn validate(&self) -> Result<(), ProjectDomainError> {
        match self.title.as_deref() {
            Some(title) if title.trim().is_empty() => Err(ProjectDomainError::EmptyTitle),
            _ => Ok(()),
        }
    }
}

/// Completion figures for a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectProgress {
    /// Number of tasks.
    pub total: usize,
    /// Tasks in the to-do column.
    pub todo: usize,
    /// Tasks in the in-progress column.
    pub in_progress: usize,
    /// Tasks in the completed column.
    pub completed: usize,
    /// Completed share of all tasks, rounded to the nearest whole percent.
    pub percentage: usize,
}

impl ProjectProgress {
    /// Tallies the given tasks.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut progress = Self::default();
        for task in tasks {
            progress.total += 1;
            match task.status() {
                TaskStatus::Todo => progress.todo += 1,
                TaskStatus::InProgress => progress.in_progress += 1,
                TaskStatus::Completed => progress.completed += 1,
            }
        }
        progress.percentage = rounded_percentage(progress.completed, progress.total);
        progress
    }
}

/// Rounds `part / whole` to a whole percentage, half away from zero.
///
/// An empty whole yields zero.
fn rounded_percentage(part: usize, whole: usize) -> usize {
    (part * 200 + whole)
        .checked_div(whole * 2)
        .unwrap_or_default()
}

impl Project {
    /// Creates a project with no tasks, stamped with the clock's time.
    #[must_use]
    pub fn new(draft: ProjectDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            title: draft.title,
            description: draft.description,
            cover_image: draft.cover_image,
            created_by: Some(draft.created_by),
            created_at: timestamp,
            updated_at: timestamp,
            tasks: Vec::new(),
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            cover_image: data.cover_image,
            created_by: data.created_by,
            created_at: data.created_at,
            updated_at: data.updated_at,
            tasks: data.tasks,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the cover image, if any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    /// Returns the creating user, if recorded.
    #[must_use]
    pub const fn created_by(&self) -> Option<UserId> {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the tasks, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Moves a task to another column.
    ///
    /// Returns the task's title, or `None` when the task is not part of this
    /// project.
    pub fn move_task(&mut self, id: TaskId, status: TaskStatus) -> Option<Title> {
        let task = self.tasks.iter_mut().find(|task| task.id() == id)?;
        task.set_status(status);
        Some(task.title().clone())
    }

    /// Applies a partial update to one task.
    ///
    /// Returns `Ok(false)` when the task is not part of this project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTitle`] when the patch carries a
    /// blank title.
    pub fn apply_task_patch(
        &mut self,
        id: TaskId,
        patch: &TaskPatch,
    ) -> Result<bool, ProjectDomainError> {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => task.apply_patch(patch).map(|()| true),
            None => Ok(false),
        }
    }

    /// Removes a task, returning it when it was present.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Adds a freshly created task at the front of the list.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Applies a metadata patch and bumps the update timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTitle`] when the patch carries a
    /// blank title. The project is left untouched in that case.
    pub fn apply_patch(
        &mut self,
        patch: &ProjectPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<(), ProjectDomainError> {
        let title = patch.title.clone().map(Title::new).transpose()?;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(cover_image) = &patch.cover_image {
            self.cover_image.clone_from(cover_image);
        }
        self.updated_at = updated_at;
        Ok(())
    }

    /// Returns the tasks of one column, newest first.
    ///
    /// Order within a column is derived from creation time; it is never
    /// stored.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.status() == status)
            .collect();
        tasks.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        tasks
    }

    /// Returns completion figures.
    #[must_use]
    pub fn progress(&self) -> ProjectProgress {
        ProjectProgress::from_tasks(&self.tasks)
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// An empty query matches every project.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.as_str().to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }
}
