//! Indicator (IKU) summaries: per-proposal averages over indicator rows

use crate::money::{mean, Percentage};
use crate::proposal::{IndicatorData, Payload, Proposal};
use crate::table::{reduce, Role, INDICATOR};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSummary {
    pub proposal_id: String,
    pub department_id: String,
    pub department_name: String,
    pub number_of_indicator: usize,
    pub baseline: f64,
    pub target_this_year: f64,
    pub realization_this_year: f64,
    pub target_next_year: f64,
    /// Average realization against average target for this year
    pub achievement_percentage: Percentage,
}

pub fn summarize_indicators(proposal: &Proposal, data: &IndicatorData) -> IndicatorSummary {
    let totals = reduce(&data.indicators, &INDICATOR);
    // every row counts, blank or not
    let rows = totals.rows;

    let target_this_year = mean(totals.get(Role::TargetThisYear), rows);
    let realization_this_year = mean(totals.get(Role::Realization), rows);

    debug!(proposal = %proposal.id, rows, "Summarized indicators");

    IndicatorSummary {
        proposal_id: proposal.id.clone(),
        department_id: proposal.department.id.clone(),
        department_name: proposal.department.name.clone(),
        number_of_indicator: rows,
        baseline: mean(totals.get(Role::Baseline), rows),
        target_this_year,
        realization_this_year,
        target_next_year: mean(totals.get(Role::TargetNextYear), rows),
        achievement_percentage: Percentage::of(
            totals.get(Role::Realization),
            totals.get(Role::TargetThisYear),
        ),
    }
}

/// One summary per indicator report, in input order
pub fn indicator_summaries(proposals: &[Proposal]) -> Vec<IndicatorSummary> {
    proposals
        .iter()
        .filter_map(|proposal| match &proposal.payload {
            Payload::IndicatorReport(data) => Some(summarize_indicators(proposal, data)),
            _ => None,
        })
        .collect()
}
