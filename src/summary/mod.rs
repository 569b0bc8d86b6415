//! Per-Department Summary Builder
//!
//! Each builder takes the proposals of one workflow stage and returns one
//! flat record per proposal, in input order. Proposals of other stages are
//! skipped. Builders are pure functions of their input (and, for planning,
//! of the evaluation instant), so every refresh recomputes from scratch.

pub mod disbursement;
pub mod indicator;
pub mod usage;

pub use disbursement::{disbursement_summaries, summarize_disbursement, DisbursementSummary};
pub use indicator::{indicator_summaries, summarize_indicators, IndicatorSummary};
pub use usage::{summarize_usage, usage_summaries, UsageSummary};

use crate::aggregate::{event_summaries, ActivitySummary, EventSummary};
use crate::proposal::{Proposal, Stage};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Any of the summary shapes rendered by the console
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StageSummary {
    Activity(ActivitySummary),
    Event(EventSummary),
    Disbursement(DisbursementSummary),
    Usage(UsageSummary),
    Indicator(IndicatorSummary),
}

/// Build the summaries for `stage`.
///
/// Activity planning yields one event summary per department; the other
/// stages yield one record per proposal. An unknown stage yields nothing.
pub fn summarize(proposals: &[Proposal], stage: &Stage, now: DateTime<Utc>) -> Vec<StageSummary> {
    let summaries: Vec<StageSummary> = match stage {
        Stage::ActivityPlanning => event_summaries(proposals, now)
            .into_iter()
            .map(StageSummary::Event)
            .collect(),
        Stage::FundDisbursement => disbursement_summaries(proposals)
            .into_iter()
            .map(StageSummary::Disbursement)
            .collect(),
        Stage::FundUsageReport => usage_summaries(proposals)
            .into_iter()
            .map(StageSummary::Usage)
            .collect(),
        Stage::IndicatorReport => indicator_summaries(proposals)
            .into_iter()
            .map(StageSummary::Indicator)
            .collect(),
        Stage::Other(name) => {
            warn!(stage = %name, "No summary builder for stage");
            Vec::new()
        }
    };

    info!(stage = %stage, proposals = proposals.len(), summaries = summaries.len(), "Built summaries");
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::{decode_document, DecodeOptions};
    use serde_json::json;

    fn mixed() -> Vec<Proposal> {
        decode_document(
            &json!([
                {"id": "1", "department": {"id": "a"}, "stage": "fund-disbursement", "data": {}},
                {"id": "2", "department": {"id": "b"}, "stage": "iku", "data": {}},
                {"id": "3", "department": {"id": "c"}, "stage": "fund-disbursement", "data": {}},
                {"id": "4", "department": {"id": "d"}, "stage": "closing", "data": {}}
            ]),
            &DecodeOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_dispatch_keeps_input_order() {
        let summaries = summarize(&mixed(), &Stage::FundDisbursement, Utc::now());
        let departments: Vec<&str> = summaries
            .iter()
            .map(|s| match s {
                StageSummary::Activity(x) => x.department_id.as_str(),
                StageSummary::Event(x) => x.department_id.as_str(),
                StageSummary::Disbursement(x) => x.department_id.as_str(),
                StageSummary::Usage(x) => x.department_id.as_str(),
                StageSummary::Indicator(x) => x.department_id.as_str(),
            })
            .collect();
        assert_eq!(departments, ["a", "c"]);
        assert!(matches!(summaries[0], StageSummary::Disbursement(_)));
    }

    #[test]
    fn test_unknown_stage_yields_nothing() {
        let summaries = summarize(&mixed(), &Stage::parse("closing"), Utc::now());
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_untagged_serialization_is_flat() {
        let summaries = summarize(&mixed(), &Stage::IndicatorReport, Utc::now());
        let json = serde_json::to_value(&summaries).unwrap();
        assert_eq!(json[0]["departmentId"], "b");
        assert_eq!(json[0]["achievementPercentage"], "0.00");
    }
}
