use super::*;

#[test]
fn backend_url_joins_without_double_slash() {
    let url = backend_url("/storage/avatars/a.png");
    assert!(url.ends_with("/storage/avatars/a.png"));
    assert!(!url.contains("//storage"));
}

#[test]
fn google_redirect_targets_backend_auth_route() {
    assert!(google_redirect_url().ends_with("/api/auth/google/redirect"));
}
