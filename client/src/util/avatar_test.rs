use super::*;

#[test]
fn missing_avatar_uses_generated_initials() {
    assert_eq!(
        avatar_url(None, "Ana Lopez"),
        "https://ui-avatars.com/api/?name=Ana%20Lopez&background=6366f1&color=fff&bold=true"
    );
    assert_eq!(avatar_url(Some("  "), ""), avatar_url(None, "User"));
}

#[test]
fn absolute_avatar_passes_through() {
    assert_eq!(avatar_url(Some("https://cdn.example.com/a.png"), "Ana"), "https://cdn.example.com/a.png");
}

#[test]
fn bare_file_resolves_under_backend_storage() {
    let expected = config::backend_url("/storage/avatars/ana.png");
    assert_eq!(avatar_url(Some("ana.png"), "Ana"), expected);
    assert_eq!(avatar_url(Some("avatars/ana.png"), "Ana"), expected);
}
