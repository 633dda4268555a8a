use session::{Identity, Role};

use super::*;

fn form() -> RegistrationForm {
    RegistrationForm {
        name: " Ana ".to_owned(),
        username: "ana".to_owned(),
        email: " ana@example.com".to_owned(),
        password: "secret".to_owned(),
    }
}

#[test]
fn validate_registration_trims_text_fields() {
    let valid = validate_registration(&form()).expect("valid");
    assert_eq!(valid.name, "Ana");
    assert_eq!(valid.email, "ana@example.com");
}

#[test]
fn validate_registration_requires_every_field() {
    let missing = RegistrationForm { username: "  ".to_owned(), ..form() };
    assert_eq!(validate_registration(&missing), Err("Fill in every field."));
}

#[test]
fn failure_message_prefers_server_reason() {
    let err = ApiError::Status { status: 422, message: Some("The email has already been taken.".to_owned()) };
    assert_eq!(registration_failure(&err), "Registration failed. The email has already been taken.");
    assert_eq!(
        registration_failure(&ApiError::Network("offline".to_owned())),
        "Registration failed. Please try again."
    );
}

#[test]
fn created_accounts_return_to_login() {
    assert_eq!(registration_target(&RegisterOutcome::Created), "/login");
    let identity = Identity {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        username: None,
        email: String::new(),
        role: Role::User,
        is_active: true,
        ban_message: None,
        avatar: None,
        created_at: None,
    };
    assert_eq!(registration_target(&RegisterOutcome::SignedIn(identity)), "/dashboard");
}
