use session::Role;

use super::*;

fn identity(role: Role) -> Identity {
    Identity {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        username: None,
        email: String::new(),
        role,
        is_active: true,
        ban_message: None,
        avatar: None,
        created_at: None,
    }
}

#[test]
fn regular_users_see_personal_links() {
    let links = nav_links(Some(&identity(Role::User)));
    assert_eq!(links, [("/dashboard", "Dashboard"), ("/analytics", "Analytics")]);
}

#[test]
fn admins_also_see_moderation_links() {
    let hrefs: Vec<&str> = nav_links(Some(&identity(Role::Admin))).into_iter().map(|(href, _)| href).collect();
    assert_eq!(hrefs, ["/dashboard", "/analytics", "/admin/users", "/admin/appeals", "/admin/bundles"]);
}

#[test]
fn no_identity_gets_personal_links_only() {
    assert_eq!(nav_links(None).len(), 2);
}
