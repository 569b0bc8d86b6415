//! Department-wide event summary across planning proposals

use super::activity::{activity_funding, count_sub_activities};
use crate::lifecycle::LifecycleCounts;
use crate::money::format_amount;
use crate::proposal::{Department, Payload, Proposal};
use crate::table::{Role, Totals};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub department_id: String,
    pub department_name: String,
    pub number_of_activity: usize,
    pub number_of_sub_activity: usize,
    pub number_of_sub_activity_plan: usize,
    pub number_of_sub_activity_started: usize,
    pub number_of_sub_activity_finished: usize,
    pub funding: i64,
    pub funding_display: String,
}

#[derive(Default)]
struct DepartmentTally {
    department: Department,
    activities: usize,
    sub_activities: usize,
    states: LifecycleCounts,
    funding: Totals,
}

impl DepartmentTally {
    fn finish(self) -> EventSummary {
        let funding = self.funding.get(Role::Amount);
        EventSummary {
            department_id: self.department.id,
            department_name: self.department.name,
            number_of_activity: self.activities,
            number_of_sub_activity: self.sub_activities,
            number_of_sub_activity_plan: self.states.pending,
            number_of_sub_activity_started: self.states.started,
            number_of_sub_activity_finished: self.states.finished,
            funding,
            funding_display: format_amount(funding),
        }
    }
}

/// One summary per department, in order of first appearance.
///
/// All planning proposals of a department are folded together; proposals of
/// other stages are ignored.
pub fn event_summaries(proposals: &[Proposal], now: DateTime<Utc>) -> Vec<EventSummary> {
    let mut tallies: Vec<DepartmentTally> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for proposal in proposals {
        let Payload::ActivityPlanning(planning) = &proposal.payload else {
            continue;
        };

        let key = department_key(&proposal.department);
        let slot = *slots.entry(key).or_insert_with(|| {
            tallies.push(DepartmentTally {
                department: proposal.department.clone(),
                ..Default::default()
            });
            tallies.len() - 1
        });
        let tally = &mut tallies[slot];

        for activity in &planning.activities {
            tally.activities += 1;
            tally.sub_activities += activity.sub_activities.len();
            tally.states.merge(count_sub_activities(activity, now));
            tally.funding.merge(&activity_funding(activity));
        }
        debug!(
            proposal = %proposal.id,
            department = key,
            activities = planning.activities.len(),
            "Folded planning proposal into event summary"
        );
    }

    tallies.into_iter().map(DepartmentTally::finish).collect()
}

/// Departments are keyed by id, falling back to the display name
fn department_key(department: &Department) -> &str {
    if department.id.is_empty() {
        &department.name
    } else {
        &department.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::{decode_document, DecodeOptions};
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_departments_fold_across_proposals() {
        let document = json!([
            {"id": "1", "department": {"id": "ti", "name": "Informatika"}, "stage": "activity-planning",
             "data": {"activityList": [
                {"subActivityList": [{"startedAt": "2024-01-01", "finishedAt": "2024-01-02"}],
                 "funding": [["a", "", "", "1000"]]},
                {"subActivityList": [{"startedAt": "2024-06-01", "finishedAt": "2024-06-02"}]}
             ]}},
            {"id": "2", "department": {"id": "fi", "name": "Fisika"}, "stage": "activity-planning",
             "data": {}},
            {"id": "3", "department": {"id": "ti", "name": "Informatika"}, "stage": "activity-planning",
             "data": {"activityList": [
                {"subActivityList": [{}, {}], "funding": [["b", "", "", "2500"]]}
             ]}},
            {"id": "4", "department": {"id": "ti", "name": "Informatika"}, "stage": "fund-disbursement",
             "data": {"tableTools": [["x", "", "", "", "999999", "1"]]}}
        ]);
        let proposals = decode_document(&document, &DecodeOptions::default()).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let summaries = event_summaries(&proposals, now);

        assert_eq!(summaries.len(), 2);
        let ti = &summaries[0];
        assert_eq!(ti.department_id, "ti");
        assert_eq!(ti.number_of_activity, 3);
        assert_eq!(ti.number_of_sub_activity, 4);
        assert_eq!(ti.number_of_sub_activity_finished, 1);
        assert_eq!(ti.number_of_sub_activity_plan, 3);
        assert_eq!(ti.funding, 3500);
        assert_eq!(ti.funding_display, "Rp. 3.500");

        let fi = &summaries[1];
        assert_eq!(fi.department_name, "Fisika");
        assert_eq!(fi.number_of_activity, 0);
        assert_eq!(fi.funding_display, "Rp. 0");
    }

    #[test]
    fn test_rerun_is_identical() {
        let document = json!([{"id": "1", "department": {"name": "Tanpa Id"}, "stage": "activity-planning",
            "data": {"activityList": [{"subActivityList": [{"startedAt": "2024-01-01"}]}]}}]);
        let proposals = decode_document(&document, &DecodeOptions::default()).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        let first = event_summaries(&proposals, now);
        assert_eq!(first, event_summaries(&proposals, now));
        assert_eq!(first[0].department_id, "");
        assert_eq!(first[0].number_of_sub_activity_started, 1);
    }
}
