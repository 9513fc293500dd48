use std::sync::Arc;

use futures::executor::block_on;
use serde_json::{Value, json};

use super::*;
use crate::net::test_support::FakeTransport;
use crate::util::token_store::MemoryTokenStore;

fn client_with(token: Option<&str>, transport: FakeTransport) -> (ApiClient, Arc<FakeTransport>) {
    let store = match token {
        Some(t) => MemoryTokenStore::with_token(t),
        None => MemoryTokenStore::default(),
    };
    let transport = Arc::new(transport);
    let client = ApiClient::new("http://api.test/", Arc::new(store), transport.clone());
    (client, transport)
}

#[test]
fn url_joins_base_and_path() {
    let (client, _) = client_with(None, FakeTransport::default());
    assert_eq!(client.url("/todos"), "http://api.test/todos");
}

#[test]
fn stored_token_is_sent_as_bearer() {
    let (client, transport) = client_with(Some("abc"), FakeTransport::default().reply(200, "[]"));
    let _: Value = block_on(client.get("/todos")).unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.url, "http://api.test/todos");
    assert_eq!(sent.header("Authorization"), Some("Bearer abc"));
    assert_eq!(sent.header("content-type"), Some("application/json"));
}

#[test]
fn missing_token_sends_no_authorization_header() {
    let (client, transport) = client_with(None, FakeTransport::default().reply(200, "{}"));
    let _: Value = block_on(client.get("/todos")).unwrap();
    assert_eq!(transport.last_request().header("Authorization"), None);
}

#[test]
fn caller_headers_override_defaults() {
    let (client, transport) = client_with(Some("abc"), FakeTransport::default().reply(200, "{}"));
    let _: Value = block_on(client.request::<(), Value>(
        Method::Get,
        "/export",
        None,
        &[("content-type", "text/csv"), ("Authorization", "Bearer other")],
    ))
    .unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.header("Content-Type"), Some("text/csv"));
    assert_eq!(sent.header("Authorization"), Some("Bearer other"));
    assert_eq!(sent.headers.len(), 2);
}

#[test]
fn post_serializes_body_as_json() {
    let (client, transport) = client_with(None, FakeTransport::default().reply(201, r#"{"id":"1"}"#));
    let created: Value = block_on(client.post("/todos", Some(&json!({ "title": "milk" })))).unwrap();

    assert_eq!(created, json!({ "id": "1" }));
    let sent = transport.last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.body.as_deref(), Some(r#"{"title":"milk"}"#));
}

#[test]
fn no_content_resolves_empty() {
    let (client, _) = client_with(Some("abc"), FakeTransport::default().reply(204, "").reply(204, "ignored"));
    block_on(client.delete::<()>("/todos/1")).unwrap();
    let empty: Option<Value> = block_on(client.delete("/todos/2")).unwrap();
    assert_eq!(empty, None);
}

#[test]
fn error_body_message_is_surfaced() {
    let (client, _) = client_with(None, FakeTransport::default().reply(400, r#"{"detail":"Title required"}"#));
    let err = block_on(client.post::<_, Value>("/todos", Some(&json!({})))).unwrap_err();
    assert_eq!(err.to_string(), "Title required");
}

#[test]
fn error_without_message_uses_status_fallback() {
    let (client, _) = client_with(None, FakeTransport::default().reply(502, "Bad Gateway"));
    let err = block_on(client.get::<Value>("/todos")).unwrap_err();
    assert_eq!(err.to_string(), "request failed with status 502");
}

#[test]
fn transport_failure_is_not_retried() {
    let (client, transport) = client_with(None, FakeTransport::default().fail("offline").reply(200, "{}"));
    let err = block_on(client.get::<Value>("/todos")).unwrap_err();
    assert_eq!(err, RequestError::Transport("offline".to_owned()));
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn mismatched_success_body_is_decode_error() {
    let (client, _) = client_with(None, FakeTransport::default().reply(200, "not json"));
    let err = block_on(client.get::<Value>("/todos")).unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[test]
fn require_token_fails_without_credential() {
    let (client, _) = client_with(None, FakeTransport::default());
    assert_eq!(client.require_token(), Err(RequestError::Unauthorized));
    let (client, _) = client_with(Some("abc"), FakeTransport::default());
    assert_eq!(client.require_token().as_deref(), Ok("abc"));
}
