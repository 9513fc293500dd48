use super::*;

fn todo(id: &str, completed: bool) -> Todo {
    Todo {
        id: id.to_owned(),
        title: format!("todo {id}"),
        description: None,
        completed,
        user_id: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn apply_page_replaces_rows_and_clears_error() {
    let mut state = TodosState { loading: true, error: Some("old".to_owned()), ..TodosState::default() };
    state.apply_page(TodoListResponse { todos: vec![todo("1", false)], total_count: 5, limit: 20, offset: 0 });
    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.total, 5);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn replace_updates_matching_row_only() {
    let mut state = TodosState { todos: vec![todo("1", false), todo("2", false)], ..TodosState::default() };
    state.replace(todo("2", true));
    state.replace(todo("9", true));
    assert!(!state.todos[0].completed);
    assert!(state.todos[1].completed);
    assert_eq!(state.todos.len(), 2);
}

#[test]
fn remove_drops_row_and_decrements_total() {
    let mut state = TodosState { todos: vec![todo("1", false)], total: 1, ..TodosState::default() };
    state.remove("missing");
    assert_eq!(state.total, 1);
    state.remove("1");
    assert!(state.todos.is_empty());
    assert_eq!(state.total, 0);
}

#[test]
fn refresh_bumps_sequence() {
    let mut state = TodosState::default();
    state.refresh();
    assert_eq!(state.refresh_seq, 1);
}

#[test]
fn older_refresh_of_same_query_is_not_current() {
    let mut state = TodosState::default();
    let first = state.window();
    state.refresh();
    assert!(!state.is_current(first));
    assert!(state.is_current(state.window()));
}

#[test]
fn query_change_invalidates_pending_window() {
    let mut state = TodosState::default();
    let pending = state.window();
    state.query = state.query.next_page();
    assert!(!state.is_current(pending));
}
