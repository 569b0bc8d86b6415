//! Per-activity counts and funding

use crate::lifecycle::LifecycleCounts;
use crate::money::format_amount;
use crate::proposal::{Activity, Payload, Proposal};
use crate::table::{Reducer, Role, Totals, ACTIVITY_FUNDING};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub proposal_id: String,
    pub department_id: String,
    pub department_name: String,
    pub code: String,
    pub title: String,
    pub number_of_sub_activity: usize,
    pub number_of_sub_activity_plan: usize,
    pub number_of_sub_activity_started: usize,
    pub number_of_sub_activity_finished: usize,
    pub funding: i64,
    pub funding_display: String,
}

/// Lifecycle counts of an activity's sub-activities at `now`
pub fn count_sub_activities(activity: &Activity, now: DateTime<Utc>) -> LifecycleCounts {
    activity
        .sub_activities
        .iter()
        .map(|sub| sub.lifecycle(now))
        .collect()
}

/// Funding totals of an activity's cost table
pub fn activity_funding(activity: &Activity) -> Totals {
    Reducer::new(&ACTIVITY_FUNDING)
        .only(&[Role::Amount])
        .reduce(&activity.funding)
}

pub fn summarize_activity(
    proposal: &Proposal,
    activity: &Activity,
    now: DateTime<Utc>,
) -> ActivitySummary {
    let counts = count_sub_activities(activity, now);
    let funding = activity_funding(activity).get(Role::Amount);

    ActivitySummary {
        proposal_id: proposal.id.clone(),
        department_id: proposal.department.id.clone(),
        department_name: proposal.department.name.clone(),
        code: activity.code.clone().unwrap_or_default(),
        title: activity.title.clone().unwrap_or_default(),
        number_of_sub_activity: activity.sub_activities.len(),
        number_of_sub_activity_plan: counts.pending,
        number_of_sub_activity_started: counts.started,
        number_of_sub_activity_finished: counts.finished,
        funding,
        funding_display: format_amount(funding),
    }
}

/// One summary per activity of a planning proposal, in payload order.
///
/// Proposals of any other stage have no activity list and yield nothing.
pub fn activity_summaries(proposal: &Proposal, now: DateTime<Utc>) -> Vec<ActivitySummary> {
    let Payload::ActivityPlanning(planning) = &proposal.payload else {
        debug!(proposal = %proposal.id, stage = %proposal.stage(), "No activity list to aggregate");
        return Vec::new();
    };

    planning
        .activities
        .iter()
        .map(|activity| summarize_activity(proposal, activity, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::{DecodeOptions, Stage};
    use chrono::TimeZone;
    use serde_json::json;

    fn planning_proposal() -> Proposal {
        Proposal::from_value(
            &json!({
                "id": "p1",
                "department": {"id": "d1", "name": "Biologi"},
                "stage": "activity-planning",
                "data": {"activityList": [
                    {
                        "code": "K1",
                        "title": "Seminar",
                        "subActivityList": [
                            {"startedAt": "2024-01-01", "finishedAt": "2024-01-05"},
                            {"startedAt": "2024-01-10", "finishedAt": "2024-01-20"},
                            {"startedAt": "2024-02-01", "finishedAt": "2024-02-10"},
                            {"title": "unscheduled"}
                        ],
                        "funding": [
                            ["Konsumsi", "50", "box", "1250000"],
                            ["Sewa", "1", "hari", "abc"],
                            ["Spanduk", "2", "buah", "300000"]
                        ]
                    },
                    {"code": "K2"}
                ]}
            }),
            &DecodeOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_activity_counts_and_funding() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let summaries = activity_summaries(&planning_proposal(), now);

        assert_eq!(summaries.len(), 2);
        let seminar = &summaries[0];
        assert_eq!(seminar.code, "K1");
        assert_eq!(seminar.number_of_sub_activity, 4);
        assert_eq!(seminar.number_of_sub_activity_plan, 2);
        assert_eq!(seminar.number_of_sub_activity_started, 1);
        assert_eq!(seminar.number_of_sub_activity_finished, 1);
        assert_eq!(seminar.funding, 1_550_000);
        assert_eq!(seminar.funding_display, "Rp. 1.550.000");

        let empty = &summaries[1];
        assert_eq!(empty.number_of_sub_activity, 0);
        assert_eq!(empty.funding, 0);
        assert_eq!(empty.funding_display, "Rp. 0");
    }

    #[test]
    fn test_state_moves_with_evaluation_instant() {
        let proposal = planning_proposal();
        let later = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let seminar = &activity_summaries(&proposal, later)[0];
        assert_eq!(seminar.number_of_sub_activity_finished, 3);
        assert_eq!(seminar.number_of_sub_activity_plan, 1);
    }

    #[test]
    fn test_other_stages_have_no_activities() {
        let proposal = Proposal::from_value(
            &json!({"id": "p2", "stage": "fund-disbursement", "data": {"activityList": [{}]}}),
            &DecodeOptions::default(),
        )
        .unwrap();
        assert_eq!(proposal.stage(), Stage::FundDisbursement);
        assert!(activity_summaries(&proposal, Utc::now()).is_empty());
    }
}
