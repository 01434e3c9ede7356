//! Row shapes of the hosted `projects` and `tasks` tables.
//!
//! Identifiers and timestamps travel as strings (UUIDs and RFC 3339); absent
//! optional values are `null`, and an empty string is read as absent.

use crate::auth::domain::UserId;
use crate::project::domain::{
    ParsePriorityError, ParseTaskStatusError, PersistedProjectData, PersistedTaskData, Priority,
    Project, ProjectDomainError, ProjectId, Task, TaskId, TaskStatus, Title,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Row of the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRow {
    /// Project identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional cover image.
    pub cover_image: Option<String>,
    /// Identifier of the creating user.
    pub created_by: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last-update timestamp.
    pub updated_at: String,
}

/// Row of the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning project identifier.
    pub project_id: String,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status string.
    pub status: String,
    /// Priority string.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Optional assignee reference.
    pub assigned_to: Option<String>,
    /// Optional image.
    pub image: Option<String>,
}

/// Errors raised while decoding rows into domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowDecodeError {
    /// A stored value failed domain validation.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// A stored status is outside the closed set.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),
    /// A stored priority is outside the closed set.
    #[error(transparent)]
    Priority(#[from] ParsePriorityError),
    /// A stored timestamp is not RFC 3339.
    #[error("invalid timestamp in '{field}': {value}")]
    Timestamp {
        /// Column name.
        field: &'static str,
        /// Stored text.
        value: String,
    },
}

/// Formats a timestamp the way the store writes it.
#[must_use]
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, RowDecodeError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| RowDecodeError::Timestamp {
            field,
            value: value.to_owned(),
        })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

impl ProjectRow {
    /// Builds the row for a project. Tasks are stored separately.
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            title: project.title().to_string(),
            description: project.description().map(str::to_owned),
            cover_image: project.cover_image().map(str::to_owned),
            created_by: project.created_by().map(|user| user.to_string()),
            created_at: format_timestamp(project.created_at()),
            updated_at: format_timestamp(project.updated_at()),
        }
    }

    /// Decodes the row, attaching the given tasks.
    ///
    /// # Errors
    ///
    /// Returns [`RowDecodeError`] when an identifier, timestamp or title is
    /// malformed.
    pub fn into_project(self, tasks: Vec<Task>) -> Result<Project, RowDecodeError> {
        let created_by = present(self.created_by)
            .map(|raw| {
                Uuid::parse_str(&raw)
                    .map(UserId::from_uuid)
                    .map_err(|_| ProjectDomainError::InvalidIdentifier(raw))
            })
            .transpose()?;
        Ok(Project::from_persisted(PersistedProjectData {
            id: ProjectId::parse(&self.id)?,
            title: Title::new(self.title)?,
            description: present(self.description),
            cover_image: present(self.cover_image),
            created_by,
            created_at: parse_timestamp("created_at", &self.created_at)?,
            updated_at: parse_timestamp("updated_at", &self.updated_at)?,
            tasks,
        }))
    }
}

impl TaskRow {
    /// Builds the row for a task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            project_id: task.project_id().to_string(),
            title: task.title().to_string(),
            description: task.description().map(str::to_owned),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            due_date: task.due_date().map(format_timestamp),
            created_at: format_timestamp(task.created_at()),
            assigned_to: task.assigned_to().map(str::to_owned),
            image: task.image().map(str::to_owned),
        }
    }

    /// Decodes the row.
    ///
    /// # Errors
    ///
    /// Returns [`RowDecodeError`] when an identifier, timestamp, title,
    /// status or priority is malformed.
    pub fn into_task(self) -> Result<Task, RowDecodeError> {
        let due_date = present(self.due_date)
            .map(|raw| parse_timestamp("due_date", &raw))
            .transpose()?;
        Ok(Task::from_persisted(PersistedTaskData {
            id: TaskId::parse(&self.id)?,
            project_id: ProjectId::parse(&self.project_id)?,
            title: Title::new(self.title)?,
            description: present(self.description),
            status: TaskStatus::try_from(self.status.as_str())?,
            priority: Priority::try_from(self.priority.as_str())?,
            due_date,
            created_at: parse_timestamp("created_at", &self.created_at)?,
            assigned_to: present(self.assigned_to),
            image: present(self.image),
        }))
    }
}
