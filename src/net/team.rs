//! Team service: read-only views over task assignees.

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{MemberTasksResponse, Task, TeamMember, TeamMembersResponse};

/// `GET /team/members` — users with tasks assigned in the caller's
/// projects.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn members(client: &ApiClient) -> Result<Vec<TeamMember>, ApiError> {
    let response: TeamMembersResponse = client.get("/team/members", &[]).await?;
    Ok(response.members)
}

/// `GET /team/members/{id}/tasks` — every task assigned to one member.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn member_tasks(client: &ApiClient, member_id: i64) -> Result<Vec<Task>, ApiError> {
    let response: MemberTasksResponse = client
        .get(&format!("/team/members/{member_id}/tasks"), &[])
        .await?;
    Ok(response.tasks)
}
