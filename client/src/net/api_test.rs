use super::*;

#[test]
fn user_status_endpoint_picks_action() {
    assert_eq!(user_status_endpoint("7", true), "/admin/users/7/activate");
    assert_eq!(user_status_endpoint("7", false), "/admin/users/7/deactivate");
}

#[test]
fn appeal_decision_endpoint_formats_action() {
    assert_eq!(appeal_decision_endpoint("3", AppealAction::Approve), "/admin/appeals/3/approve");
    assert_eq!(appeal_decision_endpoint("3", AppealAction::Reject), "/admin/appeals/3/reject");
}

#[test]
fn bundles_page_endpoint_clamps_to_first_page() {
    assert_eq!(bundles_page_endpoint(0), "/admin/bundles?page=1");
    assert_eq!(bundles_page_endpoint(4), "/admin/bundles?page=4");
}

#[test]
fn per_user_and_single_bundle_endpoints() {
    assert_eq!(user_bundles_endpoint("u9"), "/admin/users/u9/bundles");
    assert_eq!(bundle_endpoint("b2"), "/admin/bundles/b2");
}

#[test]
fn users_envelope_defaults_to_empty() {
    let envelope: UsersEnvelope = serde_json::from_str("{}").expect("envelope");
    assert!(envelope.users.is_empty());
}

#[test]
fn bundles_envelope_reads_list() {
    let envelope: BundlesEnvelope = serde_json::from_str(r#"{"bundles":[{"id":1},{"id":2}]}"#).expect("envelope");
    assert_eq!(envelope.bundles.len(), 2);
}
