use super::*;
use crate::identity::Role;

fn identity(active: bool) -> Identity {
    Identity {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        username: None,
        email: "ana@example.com".to_owned(),
        role: Role::User,
        is_active: active,
        ban_message: None,
        avatar: None,
        created_at: None,
    }
}

#[test]
fn resolving_never_redirects() {
    assert_eq!(decide(&SessionState::resolving()), GuardDecision::Pending);
}

#[test]
fn anonymous_redirects_to_login() {
    assert_eq!(decide(&SessionState::anonymous()), GuardDecision::Redirect("/login"));
}

#[test]
fn authenticated_renders_children() {
    assert_eq!(decide(&SessionState::authenticated(identity(true))), GuardDecision::Render);
}

#[test]
fn guard_ignores_ban_and_role() {
    let mut admin = identity(false);
    admin.role = Role::Admin;
    assert_eq!(decide(&SessionState::authenticated(admin)), GuardDecision::Render);
}

#[test]
fn banned_identity_is_sent_to_appeal_page() {
    assert_eq!(restricted_redirect(&identity(false), "/dashboard"), Some("/banned"));
    assert_eq!(restricted_redirect(&identity(false), "/banned"), None);
}

#[test]
fn active_identity_leaves_appeal_page() {
    assert_eq!(restricted_redirect(&identity(true), "/banned"), Some("/dashboard"));
    assert_eq!(restricted_redirect(&identity(true), "/analytics"), None);
}

#[test]
fn public_pages_bounce_only_authenticated_sessions() {
    assert_eq!(public_redirect(&SessionState::resolving()), None);
    assert_eq!(public_redirect(&SessionState::anonymous()), None);
    assert_eq!(public_redirect(&SessionState::authenticated(identity(true))), Some("/dashboard"));
}
