//! Interval Status Classifier
//!
//! A sub-activity's lifecycle is never stored. It is derived from its
//! scheduled interval and an explicit evaluation instant, so the same record
//! can report different states on different reads.
//!
//! Boundary rule, used by every aggregator:
//!
//! | condition            | state      |
//! |----------------------|------------|
//! | `now < start`        | `Pending`  |
//! | `now > end`          | `Finished` |
//! | otherwise            | `Started`  |
//!
//! Both bounds are inclusive for `Started`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived lifecycle of a scheduled interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Pending,
    Started,
    Finished,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Started => "started",
            Self::Finished => "finished",
        };
        f.write_str(label)
    }
}

/// Classify a closed interval against `now`
pub fn classify(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Lifecycle {
    if now < start {
        Lifecycle::Pending
    } else if now > end {
        Lifecycle::Finished
    } else {
        Lifecycle::Started
    }
}

/// Classify an interval whose bounds may be missing.
///
/// An unscheduled start is `Pending`; a missing end never finishes.
pub fn classify_partial(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Lifecycle {
    match (start, end) {
        (None, _) => Lifecycle::Pending,
        (Some(start), Some(end)) => classify(start, end, now),
        (Some(start), None) if now < start => Lifecycle::Pending,
        (Some(_), None) => Lifecycle::Started,
    }
}

/// Per-state counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LifecycleCounts {
    pub pending: usize,
    pub started: usize,
    pub finished: usize,
}

impl LifecycleCounts {
    pub fn record(&mut self, state: Lifecycle) {
        match state {
            Lifecycle::Pending => self.pending += 1,
            Lifecycle::Started => self.started += 1,
            Lifecycle::Finished => self.finished += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.started + self.finished
    }

    pub fn merge(&mut self, other: LifecycleCounts) {
        self.pending += other.pending;
        self.started += other.started;
        self.finished += other.finished;
    }
}

impl FromIterator<Lifecycle> for LifecycleCounts {
    fn from_iter<I: IntoIterator<Item = Lifecycle>>(iter: I) -> Self {
        let mut counts = Self::default();
        for state in iter {
            counts.record(state);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_three_states() {
        let (start, end) = (day(10), day(20));
        assert_eq!(classify(start, end, day(5)), Lifecycle::Pending);
        assert_eq!(classify(start, end, day(15)), Lifecycle::Started);
        assert_eq!(classify(start, end, day(25)), Lifecycle::Finished);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let (start, end) = (day(10), day(20));
        assert_eq!(classify(start, end, start), Lifecycle::Started);
        assert_eq!(classify(start, end, end), Lifecycle::Started);
        assert_eq!(
            classify(start, end, end + chrono::Duration::seconds(1)),
            Lifecycle::Finished
        );
    }

    #[test]
    fn test_inverted_interval() {
        assert_eq!(classify(day(20), day(10), day(5)), Lifecycle::Pending);
        assert_eq!(classify(day(20), day(10), day(15)), Lifecycle::Pending);
        assert_eq!(classify(day(20), day(10), day(25)), Lifecycle::Finished);
    }

    #[test]
    fn test_partial_intervals() {
        assert_eq!(classify_partial(None, Some(day(20)), day(25)), Lifecycle::Pending);
        assert_eq!(classify_partial(Some(day(10)), None, day(5)), Lifecycle::Pending);
        assert_eq!(classify_partial(Some(day(10)), None, day(25)), Lifecycle::Started);
    }

    #[test]
    fn test_counts_collect() {
        let counts: LifecycleCounts = [
            Lifecycle::Pending,
            Lifecycle::Finished,
            Lifecycle::Finished,
        ]
        .into_iter()
        .collect();
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.started, 0);
        assert_eq!(counts.finished, 2);
        assert_eq!(counts.total(), 3);
    }
}
