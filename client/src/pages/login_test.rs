use super::*;
use crate::net::error::RequestError;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  a@b.com ", " secret "),
        Ok(("a@b.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "x"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_rejects_non_email() {
    assert_eq!(validate_login_input("alice", "x"), Err("Enter a valid email address."));
}

#[test]
fn auth_error_message_hides_superseded_attempts() {
    assert_eq!(auth_error_message(&AuthError::Superseded), None);
    let failed = AuthError::Failed { message: "bad credentials".to_owned(), cause: RequestError::Unauthorized };
    assert_eq!(auth_error_message(&failed).as_deref(), Some("bad credentials"));
}
