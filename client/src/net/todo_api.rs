//! Todo resource client.
//!
//! Every call requires a stored token and fails with `Unauthorized` before
//! touching the network when none is present.

#[cfg(test)]
#[path = "todo_api_test.rs"]
mod todo_api_test;

use super::api::ApiClient;
use super::error::RequestError;
use super::types::{StatusFilter, Todo, TodoCreate, TodoListResponse, TodoUpdate};

pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Page window and completion filter for list queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodoQuery {
    pub limit: u32,
    pub offset: u32,
    pub status: StatusFilter,
}

impl Default for TodoQuery {
    fn default() -> Self {
        Self { limit: DEFAULT_PAGE_LIMIT, offset: 0, status: StatusFilter::All }
    }
}

impl TodoQuery {
    /// Same page size, filter changed, back to the first page.
    #[must_use]
    pub fn with_status(self, status: StatusFilter) -> Self {
        Self { status, offset: 0, ..self }
    }

    pub fn has_next(&self, total: u64) -> bool {
        u64::from(self.offset) + u64::from(self.limit) < total
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    #[must_use]
    pub fn next_page(self) -> Self {
        Self { offset: self.offset.saturating_add(self.limit), ..self }
    }

    #[must_use]
    pub fn prev_page(self) -> Self {
        Self { offset: self.offset.saturating_sub(self.limit), ..self }
    }

    /// One-based page number for display.
    pub fn page_number(&self) -> u32 {
        if self.limit == 0 { 1 } else { self.offset / self.limit + 1 }
    }

    pub(crate) fn path(&self) -> String {
        let mut path = format!("/todos?limit={}&offset={}", self.limit, self.offset);
        if let Some(status) = self.status.as_query() {
            path.push_str("&status=");
            path.push_str(status);
        }
        path
    }
}

fn todo_path(id: &str) -> String {
    format!("/todos/{id}")
}

#[derive(Clone, Debug)]
pub struct TodoApi {
    client: ApiClient,
}

impl TodoApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /todos?limit&offset[&status]`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a token, otherwise any request failure.
    pub async fn list(&self, query: TodoQuery) -> Result<TodoListResponse, RequestError> {
        self.client.require_token()?;
        self.client.get(&query.path()).await
    }

    /// `GET /todos/{id}`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a token, otherwise any request failure.
    pub async fn get(&self, id: &str) -> Result<Todo, RequestError> {
        self.client.require_token()?;
        self.client.get(&todo_path(id)).await
    }

    /// `POST /todos`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a token, otherwise any request failure.
    pub async fn create(&self, todo: &TodoCreate) -> Result<Todo, RequestError> {
        self.client.require_token()?;
        self.client.post("/todos", Some(todo)).await
    }

    /// `PUT /todos/{id}`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a token, otherwise any request failure.
    pub async fn update(&self, id: &str, changes: &TodoUpdate) -> Result<Todo, RequestError> {
        self.client.require_token()?;
        self.client.put(&todo_path(id), Some(changes)).await
    }

    /// `PUT /todos/{id}` flipping `completed`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a token, otherwise any request failure.
    pub async fn set_completed(&self, id: &str, completed: bool) -> Result<Todo, RequestError> {
        let changes = TodoUpdate { completed: Some(completed), ..TodoUpdate::default() };
        self.update(id, &changes).await
    }

    /// `DELETE /todos/{id}`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a token, otherwise any request failure.
    pub async fn delete(&self, id: &str) -> Result<(), RequestError> {
        self.client.require_token()?;
        self.client.delete(&todo_path(id)).await
    }
}
