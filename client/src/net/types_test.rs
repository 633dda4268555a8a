use super::*;

#[test]
fn bundle_accepts_numeric_id_and_sparse_fields() {
    let bundle: Bundle = serde_json::from_str(r#"{"id":12,"slug":"my-links"}"#).expect("bundle");
    assert_eq!(bundle.id, "12");
    assert_eq!(bundle.slug.as_deref(), Some("my-links"));
    assert_eq!(bundle.display_title(), "Untitled bundle");
}

#[test]
fn bundle_title_falls_back_to_name() {
    let bundle: Bundle = serde_json::from_str(r#"{"id":1,"title":"  ","name":"Portfolio"}"#).expect("bundle");
    assert_eq!(bundle.display_title(), "Portfolio");

    let bundle: Bundle = serde_json::from_str(r#"{"id":1,"title":"Links","name":"Portfolio"}"#).expect("bundle");
    assert_eq!(bundle.display_title(), "Links");
}

#[test]
fn paginator_defaults_missing_counters() {
    let page: Paginated<Bundle> = serde_json::from_str(r#"{"data":[{"id":1}]}"#).expect("page");
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.last_page, 1);
}

#[test]
fn unknown_appeal_status_reads_as_pending() {
    let appeal: Appeal = serde_json::from_str(r#"{"id":"a1","status":"escalated"}"#).expect("appeal");
    assert_eq!(appeal.status, AppealStatus::Pending);
}

#[test]
fn appeal_status_parses_known_values() {
    let appeal: Appeal = serde_json::from_str(r#"{"id":1,"status":"rejected","admin_reply":"no"}"#).expect("appeal");
    assert_eq!(appeal.status, AppealStatus::Rejected);
    assert_eq!(appeal.status.label(), "Rejected");
}

#[test]
fn admin_user_accepts_numeric_active_flag() {
    let user: AdminUser =
        serde_json::from_str(r#"{"id":4,"name":"Bo","email":"bo@x.io","role":"admin","is_active":0}"#).expect("user");
    assert!(!user.is_active);
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn click_stats_use_camel_case_keys() {
    let stats: ClickStats =
        serde_json::from_str(r#"{"totalBundleClicks":5,"totalLinkClicks":9,"clicksPerBundle":{"1":5}}"#)
            .expect("stats");
    assert_eq!(stats.total_bundle_clicks, 5);
    assert_eq!(stats.total_link_clicks, 9);
    assert_eq!(stats.clicks_per_bundle.get("1"), Some(&5));
}

#[test]
fn appeal_payload_serializes_null_evidence() {
    let payload = AppealPayload {
        message: "m".to_owned(),
        appeal_reason: "r".to_owned(),
        appeal_evidence: None,
    };
    assert_eq!(
        serde_json::to_value(&payload).expect("json"),
        serde_json::json!({"message": "m", "appeal_reason": "r", "appeal_evidence": null})
    );
}

#[test]
fn null_appeal_status_reads_as_pending() {
    let appeal: Appeal = serde_json::from_str(r#"{"id":3,"status":null}"#).expect("appeal");
    assert_eq!(appeal.status, AppealStatus::Pending);
    assert_eq!(AppealStatus::from_wire(" Approved "), AppealStatus::Approved);
}

#[test]
fn click_log_with_null_bundle_keeps_the_list() {
    let logs: Vec<ClickLog> = serde_json::from_str(
        r#"[{"id":1,"bundle_id":7,"created_at":"2024-05-20T10:00:00Z"},{"id":2,"bundle_id":null}]"#,
    )
    .expect("logs");
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].bundle_id.as_deref(), Some("7"));
    assert_eq!(logs[1].bundle_id, None);
}

#[test]
fn click_log_without_bundle_field_decodes() {
    let log: ClickLog = serde_json::from_str(r#"{"id":"9"}"#).expect("log");
    assert_eq!(log.bundle_id, None);
}
