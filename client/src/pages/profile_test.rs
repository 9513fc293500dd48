use super::*;

#[test]
fn identity_rows_list_name_then_email() {
    let rows = identity_rows(&UserIdentity::new("ada@example.com", "Ada"));
    assert_eq!(rows, vec![("Name", "Ada".to_owned()), ("Email", "ada@example.com".to_owned())]);
}

#[test]
fn identity_rows_include_id_when_known() {
    let user = UserIdentity::from_email("ada@example.com").with_id(Some("u-1".to_owned()));
    let rows = identity_rows(&user);
    assert_eq!(rows.last(), Some(&("User ID", "u-1".to_owned())));
}

#[test]
fn cookie_status_reports_presence() {
    assert_eq!(cookie_status(true), "Session cookie present");
    assert_eq!(cookie_status(false), "Session cookie missing");
}
