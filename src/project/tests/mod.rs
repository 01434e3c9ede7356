//! Unit tests for the project context.


use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use mockall::mock;

use crate::auth::domain::UserId;
use crate::project::{
    domain::{
        PersistedProjectData, PersistedTaskData, Priority, Project, ProjectId, ProjectPatch, Task,
        TaskId, TaskPatch, TaskStatus, Title,
    },
    ports::{ProjectRepository, ProjectRepositoryResult, TaskRepository},
};

mock! {
    pub Store {}

    #[async_trait]
    impl ProjectRepository for Store {
        async fn list_projects(&self) -> ProjectRepositoryResult<Vec<Project>>;
        async fn find_project(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;
        async fn insert_project(&self, project: &Project) -> ProjectRepositoryResult<()>;
        async fn update_project(
            &self,
            id: ProjectId,
            patch: &ProjectPatch,
            updated_at: DateTime<Utc>,
        ) -> ProjectRepositoryResult<Project>;
        async fn delete_project(&self, id: ProjectId) -> ProjectRepositoryResult<()>;
    }

    #[async_trait]
    impl TaskRepository for Store {
        async fn list_tasks(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Task>>;
        async fn find_task(&self, id: TaskId) -> ProjectRepositoryResult<Option<Task>>;
        async fn insert_task(&self, task: &Task) -> ProjectRepositoryResult<()>;
        async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> ProjectRepositoryResult<Task>;
        async fn update_task_status(
            &self,
            id: TaskId,
            status: TaskStatus,
        ) -> ProjectRepositoryResult<()>;
        async fn delete_task(&self, id: TaskId) -> ProjectRepositoryResult<()>;
    }
}

pub(super) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0)
        .single()
        .expect("base time should be unambiguous")
}

pub(super) fn task_at(
    project_id: ProjectId,
    title: &str,
    status: TaskStatus,
    minutes: i64,
) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        project_id,
        title: Title::new(title).expect("test titles are not blank"),
        description: None,
        status,
        priority: Priority::Medium,
        due_date: None,
        created_at: base_time() + Duration::minutes(minutes),
        assigned_to: None,
        image: None,
    })
}

pub(super) fn project_with(id: ProjectId, title: &str, tasks: Vec<Task>) -> Project {
    Project::from_persisted(PersistedProjectData {
        id,
        title: Title::new(title).expect("test titles are not blank"),
        description: None,
        cover_image: None,
        created_by: Some(UserId::new()),
        created_at: base_time(),
        updated_at: base_time(),
        tasks,
    })
}

/// A project with one task in each column, created a minute apart.
pub(super) fn sample_project() -> Project {
    let id = ProjectId::new();
    project_with(
        id,
        "Website Redesign",
        vec![
            task_at(id, "Ship launch page", TaskStatus::Completed, 2),
            task_at(id, "Write copy", TaskStatus::InProgress, 1),
            task_at(id, "Draft wireframes", TaskStatus::Todo, 0),
        ],
    )
}
