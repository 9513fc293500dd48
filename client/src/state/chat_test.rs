use super::*;

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.sending);
}

#[test]
fn begin_send_trims_and_records_user_message() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send("  add milk "), Some("add milk".to_owned()));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::User);
    assert_eq!(state.messages[0].text, "add milk");
    assert!(state.sending);
}

#[test]
fn begin_send_refuses_blank_and_concurrent_messages() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send("   "), None);
    state.begin_send("one");
    assert_eq!(state.begin_send("two"), None);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn receive_appends_reply_with_fallback_text() {
    let mut state = ChatState::default();
    state.begin_send("hi");
    state.receive(&ChatReply::default());

    let reply = &state.messages[1];
    assert_eq!(reply.sender, Sender::Assistant);
    assert_eq!(reply.text, crate::net::types::CHAT_FALLBACK_REPLY);
    assert_ne!(reply.id, state.messages[0].id);
    assert!(!state.sending);
}

#[test]
fn fail_records_prefixed_error() {
    let mut state = ChatState::default();
    state.begin_send("hi");
    state.fail(&RequestError::Unauthorized);
    assert_eq!(state.error.as_deref(), Some("Failed to send message: Unauthorized: No token found"));
    assert!(!state.sending);
}
