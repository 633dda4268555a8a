use super::*;

fn parse(json: &str) -> Identity {
    serde_json::from_str::<IdentityPayload>(json)
        .expect("payload should parse")
        .into_identity()
}

#[test]
fn bare_identity_parses_with_numeric_id() {
    let user = parse(r#"{"id":7,"name":"Ana","email":"ana@example.com","role":"admin","is_active":true}"#);
    assert_eq!(user.id, "7");
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_admin());
    assert!(!user.is_banned());
}

#[test]
fn wrapped_identity_parses() {
    let user = parse(r#"{"user":{"id":"u1","name":"Bo","email":"bo@example.com"}}"#);
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Bo");
}

#[test]
fn data_envelope_identity_parses() {
    let user = parse(r#"{"data":{"id":3,"name":"Cy","email":"cy@example.com"}}"#);
    assert_eq!(user.id, "3");
}

#[test]
fn missing_optional_fields_take_defaults() {
    let user = parse(r#"{"id":1,"name":"Di"}"#);
    assert_eq!(user.role, Role::User);
    assert!(user.is_active);
    assert_eq!(user.ban_message, None);
    assert_eq!(user.email, "");
}

#[test]
fn numeric_active_flag_is_accepted() {
    let user = parse(r#"{"id":1,"name":"Ed","is_active":0,"ban_message":"spam"}"#);
    assert!(user.is_banned());
    assert_eq!(user.ban_message.as_deref(), Some("spam"));
}

#[test]
fn unknown_role_maps_to_other() {
    let user = parse(r#"{"id":1,"name":"Fi","role":"moderator"}"#);
    assert_eq!(user.role, Role::Other);
    assert_eq!(user.role.as_str(), "other");
}

#[test]
fn boolean_id_is_rejected() {
    let result = serde_json::from_str::<Identity>(r#"{"id":true,"name":"Gu"}"#);
    assert!(result.is_err());
}

#[derive(Debug, serde::Deserialize)]
struct OwnerRef {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    owner: Option<String>,
}

#[test]
fn optional_id_tolerates_null_and_absence() {
    let row: OwnerRef = serde_json::from_str(r#"{"owner":null}"#).unwrap();
    assert_eq!(row.owner, None);
    let row: OwnerRef = serde_json::from_str("{}").unwrap();
    assert_eq!(row.owner, None);
    let row: OwnerRef = serde_json::from_str(r#"{"owner":42}"#).unwrap();
    assert_eq!(row.owner.as_deref(), Some("42"));
    assert!(serde_json::from_str::<OwnerRef>(r#"{"owner":[1]}"#).is_err());
}
