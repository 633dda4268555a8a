use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::testing::ScriptedTransport;

#[test]
fn url_joins_base_and_path() {
    let client = ApiClient::with_base(ScriptedTransport::new(), "http://backend/api/");
    assert_eq!(client.url("/user"), "http://backend/api/user");
    assert_eq!(client.url("user/appeals"), "http://backend/api/user/appeals");
}

#[test]
fn no_authorization_without_token() {
    let client = ApiClient::new(ScriptedTransport::new().reply(200, "{}"));
    let _: Value = block_on(client.get("/user/stats")).expect("ok");
    let sent = client.transport().requests();
    assert_eq!(sent[0].authorization, None);
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, "/api/user/stats");
}

#[test]
fn token_is_attached_until_cleared() {
    let client = ApiClient::new(ScriptedTransport::new().reply(200, "{}").reply(200, "{}"));
    client.set_token("t0k");
    assert!(client.has_token());
    let _: Value = block_on(client.get("/user")).expect("ok");
    client.clear_token();
    let _: Value = block_on(client.get("/user")).expect("ok");

    let sent = client.transport().requests();
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer t0k"));
    assert_eq!(sent[1].authorization, None);
}

#[test]
fn post_serializes_body() {
    let client = ApiClient::new(ScriptedTransport::new().reply(201, r#"{"ok":true}"#));
    let reply: Value = block_on(client.post("/login", &json!({"email": "a@b.c"}))).expect("ok");
    assert_eq!(reply, json!({"ok": true}));
    let sent = client.transport().requests();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].body, Some(json!({"email": "a@b.c"})));
}

#[test]
fn non_success_status_becomes_status_error() {
    let client = ApiClient::new(ScriptedTransport::new().reply(401, r#"{"message":"Unauthenticated."}"#));
    let err = block_on(client.get::<Value>("/user")).expect_err("should fail");
    assert_eq!(err, ApiError::Status { status: 401, message: Some("Unauthenticated.".to_owned()) });
    assert!(err.is_unauthorized());
}

#[test]
fn transport_failure_is_passed_through() {
    let client = ApiClient::new(ScriptedTransport::new().fail("connection refused"));
    let err = block_on(client.post_empty::<Value>("/logout")).expect_err("should fail");
    assert_eq!(err, ApiError::Network("connection refused".to_owned()));
}

#[test]
fn empty_body_decodes_as_unit() {
    let client = ApiClient::new(ScriptedTransport::new().reply(204, ""));
    block_on(client.delete::<()>("/admin/bundles/4")).expect("unit decode");
    assert_eq!(client.transport().requests()[0].method, Method::Delete);
}

#[test]
fn malformed_body_is_a_decode_error() {
    let client = ApiClient::new(ScriptedTransport::new().reply(200, "not json"));
    let err = block_on(client.get::<Value>("/user")).expect_err("should fail");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn get_data_unwraps_envelope_and_defaults_null() {
    let client = ApiClient::new(
        ScriptedTransport::new()
            .reply(200, r#"{"data":[1,2,3]}"#)
            .reply(200, r#"{"data":null}"#),
    );
    let first: Vec<u32> = block_on(client.get_data("/user/bundles")).expect("ok");
    let second: Vec<u32> = block_on(client.get_data("/user/bundles")).expect("ok");
    assert_eq!(first, vec![1, 2, 3]);
    assert!(second.is_empty());
}
