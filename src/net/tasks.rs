//! Task service: CRUD plus the status-only PATCH over `/tasks`.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{
    CreateTaskRequest, Task, TaskPriority, TaskStatus, TasksPage, UpdateTaskRequest,
    UpdateTaskStatusRequest,
};

/// Filters for the task list. Unset filters are omitted from the query
/// entirely; page and limit always go out, defaulting to the first page
/// of twenty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilters {
    pub project_id: Option<i64>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<i64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TaskFilters {
    /// Query pairs in the backend's spelling. The assignee filter is the
    /// one camelCase key (`assignedTo`) in an otherwise snake_case API.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.unwrap_or(1).to_string()),
            ("limit", self.limit.unwrap_or(20).to_string()),
        ];
        if let Some(project_id) = self.project_id {
            query.push(("project_id", project_id.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_owned()));
        }
        if let Some(priority) = self.priority {
            query.push(("priority", priority.as_str().to_owned()));
        }
        if let Some(member_id) = self.assigned_to {
            query.push(("assignedTo", member_id.to_string()));
        }
        query
    }
}

/// `GET /tasks` with filters and pagination.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn list(client: &ApiClient, filters: &TaskFilters) -> Result<TasksPage, ApiError> {
    client.get("/tasks", &filters.to_query()).await
}

/// `POST /tasks`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn create(client: &ApiClient, request: &CreateTaskRequest) -> Result<Task, ApiError> {
    client.post("/tasks", request).await
}

/// `GET /tasks/{id}`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn get(client: &ApiClient, id: i64) -> Result<Task, ApiError> {
    client.get(&format!("/tasks/{id}"), &[]).await
}

/// `PUT /tasks/{id}` with a partial update (never the project id).
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn update(
    client: &ApiClient,
    id: i64,
    request: &UpdateTaskRequest,
) -> Result<Task, ApiError> {
    client.put(&format!("/tasks/{id}"), request).await
}

/// `PATCH /tasks/{id}/status`, changing only the task's status.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn update_status(
    client: &ApiClient,
    id: i64,
    status: TaskStatus,
) -> Result<Task, ApiError> {
    client
        .patch(&format!("/tasks/{id}/status"), &UpdateTaskStatusRequest { status })
        .await
}

/// `DELETE /tasks/{id}`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/tasks/{id}")).await
}
