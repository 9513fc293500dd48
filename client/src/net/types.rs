//! Wire DTOs for the backend's auth, todo, and chat resources.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON. Todo payloads are camelCase with
//! snake_case aliases accepted, since both spellings appear in responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Identity the UI considers logged in. Derived client-side, not authoritative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Option<String>,
    pub email: String,
    pub name: String,
}

impl UserIdentity {
    pub fn new(email: &str, name: &str) -> Self {
        Self { id: None, email: email.to_owned(), name: name.to_owned() }
    }

    /// Identity whose display name is the local part of `email`.
    pub fn from_email(email: &str) -> Self {
        Self::new(email, local_part(email))
    }

    #[must_use]
    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }
}

/// Portion of an email address before the first `@` (the whole input if none).
pub fn local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /auth/register` body.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

// =============================================================================
// TODOS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(default, alias = "user_id")]
    pub user_id: Option<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
}

/// `POST /todos` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// `PUT /todos/{id}` body; absent fields are left unchanged by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// One page of todos.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListResponse {
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default, alias = "total_count")]
    pub total_count: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

/// Completion filter for list queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl StatusFilter {
    /// `status` query value; `All` sends none.
    pub fn as_query(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Completed => Some("completed"),
            Self::Incomplete => Some("incomplete"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
        }
    }

    pub fn from_label(raw: &str) -> Self {
        match raw {
            "completed" => Self::Completed,
            "incomplete" => Self::Incomplete,
            _ => Self::All,
        }
    }
}

// =============================================================================
// CHAT
// =============================================================================

/// `POST /chat/conversation` body.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Assistant reply. The backend has used both `response_text` and `response`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response_text: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub tool_calls: Vec<serde_json::Value>,
}

/// Shown when a reply carries no text.
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, I couldn't understand that.";

impl ChatReply {
    pub fn text(&self) -> &str {
        self.response_text
            .as_deref()
            .or(self.response.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or(CHAT_FALLBACK_REPLY)
    }
}
