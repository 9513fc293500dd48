use super::*;

fn todo() -> Todo {
    Todo {
        id: "t-1".to_owned(),
        title: "Buy milk".to_owned(),
        description: None,
        completed: false,
        user_id: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn edit_changes_reports_nothing_when_unchanged() {
    assert_eq!(edit_changes(&todo(), " Buy milk ", "", false), Ok(None));
}

#[test]
fn edit_changes_includes_only_modified_fields() {
    let changes = edit_changes(&todo(), "Buy oat milk", "", true).unwrap().unwrap();
    assert_eq!(
        changes,
        TodoUpdate { title: Some("Buy oat milk".to_owned()), description: None, completed: Some(true) }
    );
}

#[test]
fn edit_changes_sends_new_description() {
    let changes = edit_changes(&todo(), "Buy milk", " two litres ", false).unwrap().unwrap();
    assert_eq!(changes.description.as_deref(), Some("two litres"));
    assert_eq!(changes.title, None);
}

#[test]
fn edit_changes_requires_title() {
    assert_eq!(edit_changes(&todo(), "   ", "", false), Err("Title is required"));
}
