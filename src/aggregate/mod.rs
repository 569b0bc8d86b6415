//! Activity/Sub-Activity Aggregator
//!
//! Walks the activity → sub-activity tree of planning proposals. Lifecycle
//! counts are evaluated against the instant passed in, so callers decide
//! what "now" means for a whole pass.

pub mod activity;
pub mod event;

pub use activity::{
    activity_funding, activity_summaries, count_sub_activities, summarize_activity,
    ActivitySummary,
};
pub use event::{event_summaries, EventSummary};

use crate::proposal::Proposal;
use chrono::{DateTime, Utc};

/// Activity summaries for every planning proposal, flattened in input order
pub fn all_activity_summaries(proposals: &[Proposal], now: DateTime<Utc>) -> Vec<ActivitySummary> {
    proposals
        .iter()
        .flat_map(|proposal| activity_summaries(proposal, now))
        .collect()
}
