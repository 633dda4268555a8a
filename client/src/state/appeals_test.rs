use super::*;
use crate::net::types::AppealUser;

fn appeal(id: &str, name: &str, reason: &str, status: AppealStatus, created_at: &str) -> Appeal {
    Appeal {
        id: id.to_owned(),
        user: Some(AppealUser {
            name: Some(name.to_owned()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            avatar: None,
            role: None,
            ban_message: None,
            created_at: None,
        }),
        message: None,
        appeal_reason: Some(reason.to_owned()),
        appeal_evidence: None,
        status,
        admin_reply: None,
        created_at: Some(created_at.to_owned()),
        updated_at: None,
    }
}

fn queue() -> Vec<Appeal> {
    vec![
        appeal("1", "Ana", "Spam flag was wrong", AppealStatus::Approved, "2024-05-01T10:00:00Z"),
        appeal("2", "Budi", "Account hacked", AppealStatus::Pending, "2024-05-03T10:00:00Z"),
        appeal("3", "Citra", "Please review", AppealStatus::Rejected, "2024-05-02T10:00:00Z"),
    ]
}

fn ids(appeals: &[Appeal]) -> Vec<&str> {
    appeals.iter().map(|a| a.id.as_str()).collect()
}

#[test]
fn stats_count_each_status() {
    let stats = appeal_stats(&queue());
    assert_eq!(stats, AppealStats { total: 3, pending: 1, approved: 1, rejected: 1 });
}

#[test]
fn newest_and_oldest_sort_by_creation() {
    assert_eq!(ids(&filter_appeals(&queue(), "", None, AppealSort::Newest)), ["2", "3", "1"]);
    assert_eq!(ids(&filter_appeals(&queue(), "", None, AppealSort::Oldest)), ["1", "3", "2"]);
}

#[test]
fn pending_sort_keeps_server_order_otherwise() {
    assert_eq!(ids(&filter_appeals(&queue(), "", None, AppealSort::Pending)), ["2", "1", "3"]);
}

#[test]
fn search_matches_name_email_and_reason() {
    assert_eq!(ids(&filter_appeals(&queue(), "HACKED", None, AppealSort::Newest)), ["2"]);
    assert_eq!(ids(&filter_appeals(&queue(), "citra@", None, AppealSort::Newest)), ["3"]);
    assert_eq!(ids(&filter_appeals(&queue(), "ana", None, AppealSort::Newest)), ["1"]);
}

#[test]
fn status_filter_narrows() {
    let status = status_filter_from_value("rejected");
    assert_eq!(ids(&filter_appeals(&queue(), "", status, AppealSort::Newest)), ["3"]);
    assert_eq!(status_filter_from_value("all"), None);
}

#[test]
fn sort_from_value_defaults_to_newest() {
    assert_eq!(AppealSort::from_value("pending"), AppealSort::Pending);
    assert_eq!(AppealSort::from_value("bogus"), AppealSort::Newest);
}

#[test]
fn action_segments_and_replies() {
    assert_eq!(AppealAction::Approve.as_str(), "approve");
    assert_eq!(AppealAction::Reject.default_reply(), "Appeal rejected");
}

#[test]
fn empty_reply_is_rejected() {
    assert!(validate_reply("   ").is_err());
    assert_eq!(validate_reply(" ok "), Ok("ok".to_owned()));
}

#[test]
fn form_requires_reason() {
    assert!(AppealForm::default().to_payload().is_err());
}

#[test]
fn form_message_falls_back_to_reason() {
    let form = AppealForm { appeal_reason: " Mistake ".to_owned(), ..AppealForm::default() };
    let payload = form.to_payload().expect("payload");
    assert_eq!(payload.message, "Mistake");
    assert_eq!(payload.appeal_reason, "Mistake");
    assert_eq!(payload.appeal_evidence, None);
}

#[test]
fn form_keeps_explicit_message_and_evidence() {
    let form = AppealForm {
        appeal_reason: "Mistake".to_owned(),
        appeal_evidence: "https://example.com/proof".to_owned(),
        message: "Please look again".to_owned(),
    };
    let payload = form.to_payload().expect("payload");
    assert_eq!(payload.message, "Please look again");
    assert_eq!(payload.appeal_evidence.as_deref(), Some("https://example.com/proof"));
}

#[test]
fn has_pending_detects_open_appeal() {
    assert!(has_pending(&queue()));
    assert!(!has_pending(&queue()[..1]));
}
