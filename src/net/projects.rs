//! Project service: CRUD over `/projects`.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{CreateProjectRequest, Project, ProjectsPage, UpdateProjectRequest};

/// `GET /projects?page&limit[&search]`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn list(
    client: &ApiClient,
    page: u32,
    limit: u32,
    search: Option<&str>,
) -> Result<ProjectsPage, ApiError> {
    client.get("/projects", &list_query(page, limit, search)).await
}

/// `POST /projects`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn create(client: &ApiClient, request: &CreateProjectRequest) -> Result<Project, ApiError> {
    client.post("/projects", request).await
}

/// `GET /projects/{id}`, including the project's embedded tasks.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn get(client: &ApiClient, id: i64) -> Result<Project, ApiError> {
    client.get(&format!("/projects/{id}"), &[]).await
}

/// `PUT /projects/{id}` with a partial update.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn update(
    client: &ApiClient,
    id: i64,
    request: &UpdateProjectRequest,
) -> Result<Project, ApiError> {
    client.put(&format!("/projects/{id}"), request).await
}

/// `DELETE /projects/{id}`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/projects/{id}")).await
}

/// Query pairs for the list endpoint. A blank search term is not sent.
fn list_query(page: u32, limit: u32, search: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
    if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
        query.push(("search", term.to_owned()));
    }
    query
}
