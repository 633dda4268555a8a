use super::*;

#[test]
fn appeal_badge_class_per_status() {
    assert_eq!(appeal_badge_class(AppealStatus::Pending), "badge badge--pending");
    assert_eq!(appeal_badge_class(AppealStatus::Rejected), "badge badge--rejected");
}

#[test]
fn account_badge_labels() {
    assert_eq!(account_badge(true).1, "Active");
    assert_eq!(account_badge(false), ("badge badge--rejected", "Banned"));
}
