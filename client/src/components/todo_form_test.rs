use super::*;

#[test]
fn validate_new_todo_requires_title() {
    assert_eq!(validate_new_todo("   ", "desc"), Err("Title is required"));
}

#[test]
fn validate_new_todo_trims_and_drops_blank_description() {
    let payload = validate_new_todo("  milk ", "   ").unwrap();
    assert_eq!(payload.title, "milk");
    assert_eq!(payload.description, None);

    let payload = validate_new_todo("milk", " 2 litres ").unwrap();
    assert_eq!(payload.description.as_deref(), Some("2 litres"));
}
