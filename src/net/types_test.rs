use super::*;

// =============================================================
// Enum wire spellings
// =============================================================

#[test]
fn task_status_uses_screaming_snake_case() {
    assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), "IN_PROGRESS");
    assert_eq!(serde_json::from_value::<TaskStatus>("TODO".into()).unwrap(), TaskStatus::Todo);
}

#[test]
fn task_priority_round_trips() {
    for priority in [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ] {
        let json = serde_json::to_value(priority).unwrap();
        assert_eq!(json, priority.as_str());
        assert_eq!(serde_json::from_value::<TaskPriority>(json).unwrap(), priority);
    }
}

#[test]
fn project_status_round_trips() {
    for status in [ProjectStatus::Active, ProjectStatus::Inactive, ProjectStatus::Archived] {
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json, status.as_str());
        assert_eq!(serde_json::from_value::<ProjectStatus>(json).unwrap(), status);
    }
}

// =============================================================
// Request serialization
// =============================================================

#[test]
fn unassigned_task_create_sends_explicit_nulls() {
    let request = CreateTaskRequest {
        title: "Write report".to_owned(),
        description: String::new(),
        project_id: 3,
        priority: TaskPriority::Medium,
        due_date: None,
        assigned_to: None,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json.get("assigned_to"), Some(&serde_json::Value::Null));
    assert_eq!(json.get("due_date"), Some(&serde_json::Value::Null));
}

#[test]
fn empty_project_update_serializes_to_an_empty_object() {
    let json = serde_json::to_value(UpdateProjectRequest::default()).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn task_update_omits_unset_fields_but_keeps_clearable_ones() {
    let request = UpdateTaskRequest {
        status: Some(TaskStatus::Completed),
        ..UpdateTaskRequest::default()
    };
    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("title").is_none());
    assert_eq!(json.get("status"), Some(&serde_json::json!("COMPLETED")));
    // Clearing an assignee or a due date needs an explicit null.
    assert_eq!(json.get("assigned_to"), Some(&serde_json::Value::Null));
    assert_eq!(json.get("due_date"), Some(&serde_json::Value::Null));
}

// =============================================================
// Response deserialization
// =============================================================

#[test]
fn task_with_null_assignee_parses() {
    let task: Task = serde_json::from_str(
        r#"{
            "id": 7, "title": "t", "description": "",
            "status": "TODO", "priority": "LOW", "project_id": 1,
            "assigned_to": null,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#,
    )
    .expect("task");
    assert_eq!(task.assigned_to, None);
    assert_eq!(task.due_date, None);
}

#[test]
fn project_detail_embeds_tasks() {
    let project: Project = serde_json::from_str(
        r#"{
            "id": 1, "name": "p", "description": "", "status": "ACTIVE",
            "owner_id": 9,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
            "tasks": [{
                "id": 7, "title": "t", "description": "",
                "status": "IN_PROGRESS", "priority": "HIGH", "project_id": 1,
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z"
            }]
        }"#,
    )
    .expect("project");
    assert_eq!(project.tasks.as_ref().map(Vec::len), Some(1));
}

#[test]
fn project_list_items_have_no_tasks() {
    let project: Project = serde_json::from_str(
        r#"{
            "id": 1, "name": "p", "description": "", "status": "ARCHIVED",
            "owner_id": 9,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#,
    )
    .expect("project");
    assert!(project.tasks.is_none());
}

#[test]
fn login_response_parses_token_and_user() {
    let response: LoginResponse = serde_json::from_str(
        r#"{"token":"abc","user":{"id":1,"email":"a@b.c","name":"A","created_at":"2025-01-01T00:00:00Z"}}"#,
    )
    .expect("login response");
    assert_eq!(response.token, "abc");
    assert_eq!(response.user.id, 1);
}

// =============================================================
// Pagination invariant
// =============================================================

#[test]
fn parsed_page_is_in_range() {
    let page: TasksPage =
        serde_json::from_str(r#"{"tasks":[],"current_page":2,"total_pages":5}"#).expect("page");
    assert_eq!(page.current_page, 2);
    assert!(page.page_in_range());
}

#[test]
fn page_beyond_the_last_is_out_of_range() {
    let page: ProjectsPage =
        serde_json::from_str(r#"{"projects":[],"current_page":6,"total_pages":5}"#).expect("page");
    assert!(!page.page_in_range());
}

#[test]
fn zero_total_pages_is_always_in_range() {
    let page: TasksPage =
        serde_json::from_str(r#"{"tasks":[],"current_page":1,"total_pages":0}"#).expect("page");
    assert!(page.page_in_range());
}
