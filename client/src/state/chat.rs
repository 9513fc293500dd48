//! Transcript state for the assistant chat panel.
//!
//! DESIGN
//! ======
//! The transcript is client-only; the backend keeps its own history. Sending
//! is single-flight: a new message is refused while a reply is pending.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::RequestError;
use crate::net::types::ChatReply;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Number of tool invocations the assistant reported for this reply.
    pub tool_calls: usize,
}

impl ChatMessage {
    fn new(sender: Sender, text: &str, tool_calls: usize) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, text: text.to_owned(), tool_calls }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub sending: bool,
    pub error: Option<String>,
}

impl ChatState {
    /// Append the user's message and mark a reply pending. Returns the trimmed
    /// text to send, or `None` when blank or already sending.
    pub fn begin_send(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() || self.sending {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, text, 0));
        self.sending = true;
        self.error = None;
        Some(text.to_owned())
    }

    pub fn receive(&mut self, reply: &ChatReply) {
        self.messages
            .push(ChatMessage::new(Sender::Assistant, reply.text(), reply.tool_calls.len()));
        self.sending = false;
    }

    pub fn fail(&mut self, err: &RequestError) {
        self.error = Some(format!("Failed to send message: {err}"));
        self.sending = false;
    }
}
