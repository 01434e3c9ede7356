//! In-memory stand-in for the hosted project and task tables.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::rows::{ProjectRow, TaskRow};
use crate::project::{
    domain::{Project, ProjectId, ProjectPatch, Task, TaskId, TaskPatch, TaskStatus},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TaskRepository},
};

/// Thread-safe in-memory store holding rows the way the hosted tables do.
///
/// Clones share the same tables, so a test can keep a handle while a
/// service owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkspaceStore {
    state: Arc<RwLock<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    projects: HashMap<String, ProjectRow>,
    tasks: HashMap<String, TaskRow>,
}

impl InMemoryWorkspaceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored task rows across all projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn task_count(&self) -> ProjectRepositoryResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    fn read(&self) -> ProjectRepositoryResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ProjectRepositoryResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn decode_task(row: &TaskRow) -> ProjectRepositoryResult<Task> {
    row.clone()
        .into_task()
        .map_err(ProjectRepositoryError::persistence)
}

fn tasks_of(tables: &Tables, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Task>> {
    let key = project_id.to_string();
    let mut tasks = tables
        .tasks
        .values()
        .filter(|row| row.project_id == key)
        .map(decode_task)
        .collect::<ProjectRepositoryResult<Vec<_>>>()?;
    tasks.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
    Ok(tasks)
}

fn load_project(tables: &Tables, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
    let Some(row) = tables.projects.get(&id.to_string()) else {
        return Ok(None);
    };
    let tasks = tasks_of(tables, id)?;
    row.clone()
        .into_project(tasks)
        .map(Some)
        .map_err(ProjectRepositoryError::persistence)
}

#[async_trait]
impl ProjectRepository for InMemoryWorkspaceStore {
    async fn list_projects(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let tables = self.read()?;
        let mut projects = Vec::with_capacity(tables.projects.len());
        for row in tables.projects.values() {
            let id = ProjectId::parse(&row.id).map_err(ProjectRepositoryError::persistence)?;
            let tasks = tasks_of(&tables, id)?;
            let project = row
                .clone()
                .into_project(tasks)
                .map_err(ProjectRepositoryError::persistence)?;
            projects.push(project);
        }
        projects.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        Ok(projects)
    }

    async fn find_project(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let tables = self.read()?;
        load_project(&tables, id)
    }

    async fn insert_project(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut tables = self.write()?;
        let key = project.id().to_string();
        if tables.projects.contains_key(&key) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        tables.projects.insert(key, ProjectRow::from_project(project));
        Ok(())
    }

    async fn update_project(
        &self,
        id: ProjectId,
        patch: &ProjectPatch,
        updated_at: DateTime<Utc>,
    ) -> ProjectRepositoryResult<Project> {
        let mut tables = self.write()?;
        let mut project =
            load_project(&tables, id)?.ok_or(ProjectRepositoryError::ProjectNotFound(id))?;
        project
            .apply_patch(patch, updated_at)
            .map_err(ProjectRepositoryError::persistence)?;
        tables
            .projects
            .insert(id.to_string(), ProjectRow::from_project(&project));
        Ok(project)
    }

    async fn delete_project(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut tables = self.write()?;
        let key = id.to_string();
        if !tables.projects.contains_key(&key) {
            return Err(ProjectRepositoryError::ProjectNotFound(id));
        }
        tables.tasks.retain(|_, row| row.project_id != key);
        tables.projects.remove(&key);
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryWorkspaceStore {
    async fn list_tasks(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Task>> {
        let tables = self.read()?;
        tasks_of(&tables, project_id)
    }

    async fn find_task(&self, id: TaskId) -> ProjectRepositoryResult<Option<Task>> {
        let tables = self.read()?;
        tables
            .tasks
            .get(&id.to_string())
            .map(decode_task)
            .transpose()
    }

    async fn insert_task(&self, task: &Task) -> ProjectRepositoryResult<()> {
        let mut tables = self.write()?;
        if !tables.projects.contains_key(&task.project_id().to_string()) {
            return Err(ProjectRepositoryError::ProjectNotFound(task.project_id()));
        }
        let key = task.id().to_string();
        if tables.tasks.contains_key(&key) {
            return Err(ProjectRepositoryError::DuplicateTask(task.id()));
        }
        tables.tasks.insert(key, TaskRow::from_task(task));
        Ok(())
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> ProjectRepositoryResult<Task> {
        let mut tables = self.write()?;
        let key = id.to_string();
        let row = tables
            .tasks
            .get(&key)
            .ok_or(ProjectRepositoryError::TaskNotFound(id))?;
        let mut task = decode_task(row)?;
        task.apply_patch(patch)
            .map_err(ProjectRepositoryError::persistence)?;
        tables.tasks.insert(key, TaskRow::from_task(&task));
        Ok(task)
    }

    async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> ProjectRepositoryResult<()> {
        let mut tables = self.write()?;
        let row = tables
            .tasks
            .get_mut(&id.to_string())
            .ok_or(ProjectRepositoryError::TaskNotFound(id))?;
        status.as_str().clone_into(&mut row.status);
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> ProjectRepositoryResult<()> {
        let mut tables = self.write()?;
        tables
            .tasks
            .remove(&id.to_string())
            .map(|_| ())
            .ok_or(ProjectRepositoryError::TaskNotFound(id))
    }
}

