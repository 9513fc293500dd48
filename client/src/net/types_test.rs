use super::*;

#[test]
fn local_part_splits_on_first_at() {
    assert_eq!(local_part("a@b.com"), "a");
    assert_eq!(local_part("first.last@x@y"), "first.last");
    assert_eq!(local_part("no-at-sign"), "no-at-sign");
}

#[test]
fn identity_from_email_derives_name() {
    let user = UserIdentity::from_email("a@b.com");
    assert_eq!(user, UserIdentity { id: None, email: "a@b.com".to_owned(), name: "a".to_owned() });
}

#[test]
fn login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.com", password: "x" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "x" }));
}

#[test]
fn token_response_tolerates_extra_fields() {
    let parsed: TokenResponse =
        serde_json::from_str(r#"{"access_token":"tok1","token_type":"bearer","user":{"id":1}}"#).unwrap();
    assert_eq!(parsed.access_token, "tok1");
    assert_eq!(parsed.token_type.as_deref(), Some("bearer"));
}

#[test]
fn todo_accepts_camel_and_snake_case() {
    let camel: Todo = serde_json::from_str(
        r#"{"id":"1","title":"t","completed":false,"userId":"u","createdAt":"c","updatedAt":"u2"}"#,
    )
    .unwrap();
    let snake: Todo = serde_json::from_str(
        r#"{"id":"1","title":"t","completed":false,"user_id":"u","created_at":"c","updated_at":"u2"}"#,
    )
    .unwrap();
    assert_eq!(camel, snake);
    assert_eq!(camel.user_id.as_deref(), Some("u"));
}

#[test]
fn todo_update_omits_unset_fields() {
    let body = serde_json::to_value(TodoUpdate { completed: Some(true), ..TodoUpdate::default() }).unwrap();
    assert_eq!(body, serde_json::json!({ "completed": true }));
}

#[test]
fn list_response_reads_total_count_alias() {
    let page: TodoListResponse =
        serde_json::from_str(r#"{"todos":[],"total_count":7,"limit":20,"offset":0}"#).unwrap();
    assert_eq!(page.total_count, 7);
}

#[test]
fn status_filter_query_values() {
    assert_eq!(StatusFilter::All.as_query(), None);
    assert_eq!(StatusFilter::Completed.as_query(), Some("completed"));
    assert_eq!(StatusFilter::Incomplete.as_query(), Some("incomplete"));
    assert_eq!(StatusFilter::from_label("incomplete"), StatusFilter::Incomplete);
    assert_eq!(StatusFilter::from_label("whatever"), StatusFilter::All);
}

#[test]
fn chat_reply_text_prefers_response_text() {
    let reply: ChatReply = serde_json::from_str(r#"{"response_text":"hi","response":"old"}"#).unwrap();
    assert_eq!(reply.text(), "hi");
    let reply: ChatReply = serde_json::from_str(r#"{"response":"old"}"#).unwrap();
    assert_eq!(reply.text(), "old");
    assert_eq!(ChatReply::default().text(), CHAT_FALLBACK_REPLY);
}
