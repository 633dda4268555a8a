use std::collections::HashMap;

use time::macros::datetime;

use super::*;

const NOW: OffsetDateTime = datetime!(2024-05-20 12:00:00 UTC);

fn log(id: &str, bundle: &str, created_at: &str) -> ClickLog {
    ClickLog {
        id: id.to_owned(),
        bundle_id: Some(bundle.to_owned()),
        link_id: None,
        ip_address: None,
        created_at: Some(created_at.to_owned()),
    }
}

fn bundle(id: &str, title: &str) -> Bundle {
    Bundle {
        id: id.to_owned(),
        title: Some(title.to_owned()),
        name: None,
        slug: None,
        profile_image_url: None,
        links_count: None,
        theme: None,
        user: None,
        created_at: None,
    }
}

fn ids(logs: &[ClickLog]) -> Vec<&str> {
    logs.iter().map(|l| l.id.as_str()).collect()
}

#[test]
fn time_range_defaults_to_seven_days() {
    assert_eq!(TimeRange::default(), TimeRange::Last7Days);
    assert_eq!(TimeRange::from_value("90days"), TimeRange::Last90Days);
    assert_eq!(TimeRange::from_value("forever"), TimeRange::Last7Days);
    assert_eq!(TimeRange::All.cutoff(NOW), None);
}

#[test]
fn filter_logs_applies_range_and_bundle() {
    let logs = vec![
        log("a", "1", "2024-05-20T06:00:00Z"),
        log("b", "2", "2024-05-18T12:00:00Z"),
        log("c", "1", "2024-04-01T12:00:00Z"),
    ];
    assert_eq!(ids(&filter_logs(&logs, None, TimeRange::Last24Hours, NOW)), ["a"]);
    assert_eq!(ids(&filter_logs(&logs, None, TimeRange::Last7Days, NOW)), ["a", "b"]);
    assert_eq!(ids(&filter_logs(&logs, Some("1"), TimeRange::All, NOW)), ["a", "c"]);
    assert_eq!(ids(&filter_logs(&logs, Some("1"), TimeRange::Last90Days, NOW)), ["a", "c"]);
}

#[test]
fn bounded_range_drops_undated_logs() {
    let mut undated = log("x", "1", "");
    undated.created_at = None;
    let logs = [undated];
    assert!(filter_logs(&logs, None, TimeRange::Last30Days, NOW).is_empty());
    assert_eq!(filter_logs(&logs, None, TimeRange::All, NOW).len(), 1);
}

#[test]
fn growth_is_zero_positive_without_previous_week() {
    let logs = vec![log("a", "1", "2024-05-19T12:00:00Z")];
    assert_eq!(weekly_growth(&logs, NOW), Growth { percent: 0, positive: true });
}

#[test]
fn growth_compares_adjacent_weeks() {
    let logs = vec![
        log("a", "1", "2024-05-19T12:00:00Z"),
        log("b", "1", "2024-05-18T12:00:00Z"),
        log("c", "1", "2024-05-17T12:00:00Z"),
        log("d", "1", "2024-05-10T12:00:00Z"),
        log("e", "1", "2024-05-09T12:00:00Z"),
    ];
    assert_eq!(weekly_growth(&logs, NOW), Growth { percent: 50, positive: true });

    let shrinking = vec![log("a", "1", "2024-05-19T12:00:00Z"), log("d", "1", "2024-05-10T12:00:00Z"), log("e", "1", "2024-05-09T12:00:00Z"), log("f", "1", "2024-05-08T12:00:00Z")];
    assert_eq!(weekly_growth(&shrinking, NOW), Growth { percent: 67, positive: false });
}

#[test]
fn top_bundles_rank_by_clicks() {
    let bundles: Vec<Bundle> = (1..=6).map(|i| bundle(&i.to_string(), "B")).collect();
    let stats = ClickStats {
        clicks_per_bundle: HashMap::from([("3".to_owned(), 9), ("5".to_owned(), 4), ("1".to_owned(), 1)]),
        ..ClickStats::default()
    };
    let top = top_bundles(&bundles, &stats);
    assert_eq!(top.len(), TOP_BUNDLES);
    let order: Vec<(&str, u64)> = top.iter().map(|r| (r.bundle.id.as_str(), r.clicks)).collect();
    assert_eq!(order[..3], [("3", 9), ("5", 4), ("1", 1)]);
    assert_eq!(order[3].1, 0);
}

#[test]
fn recent_activity_merges_newest_first() {
    let views = vec![log("v1", "1", "2024-05-20T10:00:00Z"), log("v2", "9", "2024-05-20T08:00:00Z")];
    let clicks = vec![log("c1", "1", "2024-05-20T11:00:00Z")];
    let bundles = vec![bundle("1", "Music")];
    let recent = recent_activity(&views, &clicks, &bundles);
    let order: Vec<(&str, ActivityKind)> = recent.iter().map(|a| (a.log.id.as_str(), a.kind)).collect();
    assert_eq!(order, [("c1", ActivityKind::Click), ("v1", ActivityKind::View), ("v2", ActivityKind::View)]);
    assert_eq!(recent[0].bundle_title.as_deref(), Some("Music"));
    assert_eq!(recent[2].bundle_title, None);
}

#[test]
fn recent_activity_is_capped() {
    let views: Vec<ClickLog> = (0..15).map(|i| log(&i.to_string(), "1", "2024-05-20T10:00:00Z")).collect();
    assert_eq!(recent_activity(&views, &[], &[]).len(), RECENT_ACTIVITY);
}

#[test]
fn rates_and_averages() {
    assert!((click_through_rate(3, 1) - 33.3).abs() < f64::EPSILON);
    assert!(click_through_rate(0, 5).abs() < f64::EPSILON);
    assert_eq!(average_per_bundle(7, 2), 4);
    assert_eq!(average_per_bundle(7, 0), 0);
}

#[test]
fn top_locations_count_addresses() {
    let mut logs: Vec<ClickLog> = (0..3).map(|i| log(&i.to_string(), "1", "")).collect();
    logs[0].ip_address = Some("10.0.0.1".to_owned());
    logs[1].ip_address = Some("10.0.0.2".to_owned());
    logs[2].ip_address = Some("10.0.0.2".to_owned());
    let extra = log("u", "1", "");
    let top = top_locations(logs.iter().chain(std::iter::once(&extra)));
    assert_eq!(top, [("10.0.0.2".to_owned(), 2), ("10.0.0.1".to_owned(), 1), ("Unknown".to_owned(), 1)]);
}
