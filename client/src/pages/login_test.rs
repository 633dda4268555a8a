use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@example.com ", "secret"),
        Ok(("ana@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("ana@example.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("a@b.c", " pw ").map(|(_, p)| p), Ok(" pw ".to_owned()));
}
