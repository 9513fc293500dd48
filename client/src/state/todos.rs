//! Todo list view state: current page, query window, and load status.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use crate::net::todo_api::TodoQuery;
use crate::net::types::{Todo, TodoListResponse};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodosState {
    pub query: TodoQuery,
    pub todos: Vec<Todo>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped to force a reload without changing the query.
    pub refresh_seq: u64,
}

impl TodosState {
    pub fn apply_page(&mut self, page: TodoListResponse) {
        self.todos = page.todos;
        self.total = page.total_count;
        self.loading = false;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Replace a todo in place after an update.
    pub fn replace(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        }
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() < before {
            self.total = self.total.saturating_sub(1);
        }
    }

    pub fn refresh(&mut self) {
        self.refresh_seq += 1;
    }

    /// Load window a response must match to be applied.
    pub fn window(&self) -> (TodoQuery, u64) {
        (self.query, self.refresh_seq)
    }

    /// Whether a load started for `window` is still the latest one.
    pub fn is_current(&self, window: (TodoQuery, u64)) -> bool {
        self.window() == window
    }
}
