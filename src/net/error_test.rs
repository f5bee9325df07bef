use super::*;

// =============================================================
// Normalization: detail list / detail string / message / fallback
// =============================================================

#[test]
fn validation_detail_joins_field_messages() {
    let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required","type":"value_error.missing"}]}"#;
    let err = ApiError::from_response(422, "Unprocessable Entity", body);
    assert_eq!(err.message(), "field required");
}

#[test]
fn multiple_validation_messages_join_with_commas() {
    let body = r#"{"detail":[
        {"loc":["body","title"],"msg":"field required","type":"value_error.missing"},
        {"loc":["body","project_id"],"msg":"value is not a valid integer","type":"type_error.integer"}
    ]}"#;
    let err = ApiError::from_response(422, "Unprocessable Entity", body);
    assert_eq!(err.message(), "field required, value is not a valid integer");
}

#[test]
fn string_detail_is_used_verbatim() {
    let err = ApiError::from_response(404, "Not Found", r#"{"detail":"Project not found"}"#);
    assert_eq!(err.message(), "Project not found");
}

#[test]
fn message_field_is_the_generic_fallback() {
    let err = ApiError::from_response(500, "Internal Server Error", r#"{"message":"boom"}"#);
    assert_eq!(err.message(), "boom");
}

#[test]
fn non_json_body_falls_back_to_status_text() {
    let err = ApiError::from_response(502, "Bad Gateway", "<html>nope</html>");
    assert_eq!(err.message(), "Bad Gateway");
}

#[test]
fn empty_status_text_falls_back_to_the_code() {
    let err = ApiError::from_response(500, "", "");
    assert_eq!(err.message(), "request failed with status 500");
}

#[test]
fn empty_detail_list_falls_through_to_message() {
    let err = ApiError::from_response(400, "Bad Request", r#"{"detail":[],"message":"nothing to do"}"#);
    assert_eq!(err.message(), "nothing to do");
}

// =============================================================
// Status vs transport
// =============================================================

#[test]
fn not_found_carries_its_status_code() {
    let err = ApiError::from_response(404, "Not Found", "");
    assert_eq!(err.status(), Some(404));
}

#[test]
fn transport_failure_has_no_status_code() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.message(), "connection refused");
}

#[test]
fn display_matches_the_normalized_message() {
    let err = ApiError::from_response(404, "Not Found", r#"{"detail":"Task not found"}"#);
    assert_eq!(err.to_string(), "Task not found");
}

// =============================================================
// Body parsing
// =============================================================

#[test]
fn detail_parses_as_text_or_fields() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"nope"}"#).expect("body");
    assert_eq!(body.detail, Some(Detail::Text("nope".to_owned())));

    let body: ErrorBody =
        serde_json::from_str(r#"{"detail":[{"loc":["body"],"msg":"m","type":"t"}]}"#).expect("body");
    match body.detail {
        Some(Detail::Fields(fields)) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].msg, "m");
            assert_eq!(fields[0].kind, "t");
        }
        other => panic!("expected field list, got {other:?}"),
    }
}

#[test]
fn unknown_fields_in_the_body_are_ignored() {
    let err = ApiError::from_response(403, "Forbidden", r#"{"detail":"denied","trace_id":"x-1"}"#);
    assert_eq!(err.message(), "denied");
}
