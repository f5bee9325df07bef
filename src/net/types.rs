//! Wire types for the taskboard backend.
//!
//! Field names and enum spellings follow the backend contract exactly;
//! nothing is renamed client-side. Timestamps stay as the ISO strings the
//! server sends.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated account. Replaced wholesale on login, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Active,
    Inactive,
    Archived,
}

impl ProjectStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::Inactive => "INACTIVE",
            ProjectStatus::Archived => "ARCHIVED",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub owner_id: i64,
    pub created_at: String,
    pub updated_at: String,
    /// Embedded only by `GET /projects/{id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
            TaskPriority::Urgent => "URGENT",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project_id: i64,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A task assignee as surfaced by the team view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// ---- auth ----

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

// ---- projects ----

#[derive(Clone, Debug, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

/// Partial update; absent fields are omitted from the request body.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl ProjectsPage {
    /// Pagination invariant: `1 <= current_page <= total_pages` whenever
    /// any pages exist.
    #[must_use]
    pub fn page_in_range(&self) -> bool {
        page_in_range(self.current_page, self.total_pages)
    }
}

// ---- tasks ----

/// An unassigned task and an unscheduled one are sent as explicit `null`s,
/// never as empty strings or omitted keys.
#[derive(Clone, Debug, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub project_id: i64,
    pub priority: TaskPriority,
    pub due_date: Option<String>,
    pub assigned_to: Option<i64>,
}

/// Partial update; `project_id` deliberately has no field here, a task
/// cannot move between projects. `due_date` and `assigned_to` are always
/// sent so an existing value can be cleared.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    pub due_date: Option<String>,
    pub assigned_to: Option<i64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TasksPage {
    pub tasks: Vec<Task>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl TasksPage {
    /// See [`ProjectsPage::page_in_range`].
    #[must_use]
    pub fn page_in_range(&self) -> bool {
        page_in_range(self.current_page, self.total_pages)
    }
}

// ---- team ----

#[derive(Clone, Debug, Deserialize)]
pub struct TeamMembersResponse {
    pub members: Vec<TeamMember>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MemberTasksResponse {
    pub tasks: Vec<Task>,
}

fn page_in_range(current: u32, total: u32) -> bool {
    total == 0 || (1..=total).contains(&current)
}
