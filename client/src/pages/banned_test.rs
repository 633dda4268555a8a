use session::Role;

use super::*;

fn identity(ban_message: Option<&str>) -> Identity {
    Identity {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        username: None,
        email: String::new(),
        role: Role::User,
        is_active: false,
        ban_message: ban_message.map(str::to_owned),
        avatar: None,
        created_at: None,
    }
}

#[test]
fn ban_notice_uses_admin_message() {
    assert_eq!(ban_notice(Some(&identity(Some("Spam links")))), "Spam links");
}

#[test]
fn ban_notice_falls_back_when_blank() {
    assert_eq!(ban_notice(Some(&identity(Some("  ")))), DEFAULT_BAN_NOTICE);
    assert_eq!(ban_notice(Some(&identity(None))), DEFAULT_BAN_NOTICE);
    assert_eq!(ban_notice(None), DEFAULT_BAN_NOTICE);
}
