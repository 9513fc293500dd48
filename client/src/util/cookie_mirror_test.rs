use super::*;

#[test]
fn session_cookie_matches_edge_contract() {
    assert_eq!(session_cookie("tok1"), "todo_app_token=tok1; path=/; Secure; SameSite=Lax");
}

#[test]
fn session_cookie_is_not_http_only() {
    assert!(!session_cookie("t").contains("HttpOnly"));
}

#[test]
fn expired_cookie_clears_value_on_same_path() {
    let line = expired_session_cookie();
    assert!(line.starts_with("todo_app_token=;"));
    assert!(line.contains("path=/"));
    assert!(line.contains("Max-Age=0"));
}

#[test]
fn read_session_cookie_finds_token_among_others() {
    assert_eq!(read_session_cookie("theme=dark; todo_app_token=abc; x=1"), Some("abc"));
    assert_eq!(read_session_cookie("todo_app_token=abc"), Some("abc"));
}

#[test]
fn read_session_cookie_ignores_missing_or_empty() {
    assert_eq!(read_session_cookie("theme=dark"), None);
    assert_eq!(read_session_cookie("todo_app_token="), None);
    assert_eq!(read_session_cookie(""), None);
}

#[test]
fn memory_mirror_tracks_set_and_clear() {
    let mirror = MemoryCookieMirror::default();
    assert_eq!(mirror.value(), None);

    mirror.mirror("tok1");
    assert_eq!(mirror.value().as_deref(), Some("tok1"));

    mirror.clear();
    assert_eq!(mirror.value(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_mirror_is_noop_outside_browser() {
    DocumentCookieMirror.mirror("tok1");
    DocumentCookieMirror.clear();
    assert_eq!(DocumentCookieMirror::current(), None);
}
