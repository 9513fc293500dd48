use super::*;

#[test]
fn validate_register_input_trims_identity_fields() {
    assert_eq!(
        validate_register_input(" ada@example.com ", " Ada ", "correct horse"),
        Ok(Registration {
            email: "ada@example.com".to_owned(),
            name: "Ada".to_owned(),
            password: "correct horse".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "Ada", "password1"), Err("Fill in name, email, and password."));
    assert_eq!(validate_register_input("a@b.com", "  ", "password1"), Err("Fill in name, email, and password."));
}

#[test]
fn validate_register_input_checks_email_and_password_length() {
    assert_eq!(validate_register_input("ada", "Ada", "password1"), Err("Enter a valid email address."));
    assert_eq!(validate_register_input("a@b.com", "Ada", "short"), Err("Password must be at least 8 characters."));
}
