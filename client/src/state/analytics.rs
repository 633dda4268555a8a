//! Click analytics derived from the user's bundle and link click logs.
//!
//! DESIGN
//! ======
//! The page fetches stats, bundles and both log tables once; every figure
//! shown is recomputed from those copies when a filter changes. All functions
//! take `now` explicitly so results are reproducible.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::cmp::Reverse;

use time::{Duration, OffsetDateTime};

use crate::net::types::{Bundle, ClickLog, ClickStats};
use crate::util::time::parse_timestamp;

pub const TOP_BUNDLES: usize = 5;
pub const RECENT_ACTIVITY: usize = 10;
pub const TOP_LOCATIONS: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    Last24Hours,
    #[default]
    Last7Days,
    Last30Days,
    Last90Days,
    All,
}

impl TimeRange {
    pub const ALL: [Self; 5] = [Self::Last24Hours, Self::Last7Days, Self::Last30Days, Self::Last90Days, Self::All];

    pub fn value(self) -> &'static str {
        match self {
            Self::Last24Hours => "24hours",
            Self::Last7Days => "7days",
            Self::Last30Days => "30days",
            Self::Last90Days => "90days",
            Self::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Last24Hours => "Last 24 hours",
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
            Self::All => "All time",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|r| r.value() == value).unwrap_or_default()
    }

    /// Earliest included instant; `None` includes everything.
    pub fn cutoff(self, now: OffsetDateTime) -> Option<OffsetDateTime> {
        let span = match self {
            Self::Last24Hours => Duration::hours(24),
            Self::Last7Days => Duration::days(7),
            Self::Last30Days => Duration::days(30),
            Self::Last90Days => Duration::days(90),
            Self::All => return None,
        };
        Some(now - span)
    }
}

fn logged_at(log: &ClickLog) -> Option<OffsetDateTime> {
    log.created_at.as_deref().and_then(parse_timestamp)
}

/// Logs for `bundle` (`None` = every bundle) inside `range`.
///
/// With a bounded range, logs without a readable timestamp are excluded.
pub fn filter_logs(logs: &[ClickLog], bundle: Option<&str>, range: TimeRange, now: OffsetDateTime) -> Vec<ClickLog> {
    let cutoff = range.cutoff(now);
    logs.iter()
        .filter(|log| bundle.is_none_or(|id| log.bundle_id.as_deref() == Some(id)))
        .filter(|log| cutoff.is_none_or(|cutoff| logged_at(log).is_some_and(|at| at >= cutoff)))
        .cloned()
        .collect()
}

/// Week-over-week change in click volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Growth {
    /// Absolute rounded percentage.
    pub percent: u64,
    pub positive: bool,
}

/// Compare the last 7 days with the 7 before. An empty previous week reads
/// as `0%`, positive.
pub fn weekly_growth(logs: &[ClickLog], now: OffsetDateTime) -> Growth {
    let week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);
    let (mut this_week, mut last_week) = (0_u32, 0_u32);
    for at in logs.iter().filter_map(logged_at) {
        if at >= week_ago {
            this_week += 1;
        } else if at >= two_weeks_ago {
            last_week += 1;
        }
    }
    if last_week == 0 {
        return Growth { percent: 0, positive: true };
    }
    let change = (f64::from(this_week) - f64::from(last_week)) / f64::from(last_week) * 100.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = change.round().abs() as u64;
    Growth { percent, positive: change >= 0.0 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedBundle {
    pub bundle: Bundle,
    pub clicks: u64,
}

/// Bundles ordered by `clicksPerBundle`, highest first, at most [`TOP_BUNDLES`].
pub fn top_bundles(bundles: &[Bundle], stats: &ClickStats) -> Vec<RankedBundle> {
    let mut ranked: Vec<RankedBundle> = bundles
        .iter()
        .map(|b| RankedBundle {
            clicks: stats.clicks_per_bundle.get(&b.id).copied().unwrap_or(0),
            bundle: b.clone(),
        })
        .collect();
    ranked.sort_by_key(|r| Reverse(r.clicks));
    ranked.truncate(TOP_BUNDLES);
    ranked
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    /// A bundle page view.
    View,
    /// A link click inside a bundle.
    Click,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub log: ClickLog,
    /// Title of the bundle the event belongs to, when it is still listed.
    pub bundle_title: Option<String>,
}

/// Most recent view and click events merged, newest first.
pub fn recent_activity(bundle_logs: &[ClickLog], link_logs: &[ClickLog], bundles: &[Bundle]) -> Vec<Activity> {
    let title_of = |log: &ClickLog| {
        bundles
            .iter()
            .find(|b| log.bundle_id.as_deref() == Some(b.id.as_str()))
            .map(|b| b.display_title().to_owned())
    };
    let tag = |kind: ActivityKind| {
        move |log: &ClickLog| Activity { kind, log: log.clone(), bundle_title: title_of(log) }
    };
    let mut merged: Vec<Activity> = bundle_logs
        .iter()
        .map(tag(ActivityKind::View))
        .chain(link_logs.iter().map(tag(ActivityKind::Click)))
        .collect();
    merged.sort_by_cached_key(|a| Reverse(logged_at(&a.log)));
    merged.truncate(RECENT_ACTIVITY);
    merged
}

/// Link clicks per bundle view, as a percentage with one decimal.
pub fn click_through_rate(views: usize, clicks: usize) -> f64 {
    if views == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let rate = clicks as f64 / views as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Events per bundle, rounded; 0 without bundles.
pub fn average_per_bundle(events: usize, bundles: usize) -> u64 {
    if bundles == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let average = (events as f64 / bundles as f64).round() as u64;
    average
}

/// Most frequent client addresses across both logs, at most [`TOP_LOCATIONS`].
pub fn top_locations<'a>(logs: impl IntoIterator<Item = &'a ClickLog>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for log in logs {
        let ip = log.ip_address.as_deref().filter(|ip| !ip.is_empty()).unwrap_or("Unknown");
        match counts.iter_mut().find(|(seen, _)| seen == ip) {
            Some((_, count)) => *count += 1,
            None => counts.push((ip.to_owned(), 1)),
        }
    }
    counts.sort_by_key(|(_, count)| Reverse(*count));
    counts.truncate(TOP_LOCATIONS);
    counts
}
