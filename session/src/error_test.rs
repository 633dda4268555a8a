use super::*;

#[test]
fn from_status_reads_top_level_message() {
    let err = ApiError::from_status(422, r#"{"message":"Email already taken"}"#);
    assert_eq!(err.server_message(), Some("Email already taken"));
}

#[test]
fn from_status_falls_back_to_validation_errors() {
    let body = r#"{"errors":{"message":["The message field is required."]}}"#;
    let err = ApiError::from_status(422, body);
    assert_eq!(err.server_message(), Some("The message field is required."));
}

#[test]
fn from_status_ignores_non_json_bodies() {
    let err = ApiError::from_status(500, "<html>oops</html>");
    assert_eq!(err, ApiError::Status { status: 500, message: None });
}

#[test]
fn blank_message_is_treated_as_missing() {
    let err = ApiError::from_status(400, r#"{"message":"   "}"#);
    assert_eq!(err.server_message(), None);
}

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Status { status: 400, message: Some("Nope".to_owned()) };
    assert_eq!(err.user_message("Please try again."), "Nope");
}

#[test]
fn user_message_uses_fallback_for_network_errors() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.user_message("Please try again."), "Please try again.");
}

#[test]
fn unauthorized_covers_401_and_403_only() {
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(ApiError::Status { status: 403, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 404, message: None }.is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 502, message: None };
    assert_eq!(err.to_string(), "request rejected with status 502");
}
