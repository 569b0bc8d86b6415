//! Fund-usage report summaries

use crate::money::Percentage;
use crate::proposal::{FundingTables, Payload, Proposal};
use crate::table::{reduce, Role, INCENTIVE_REPORT, TOOLS_REPORT};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub proposal_id: String,
    pub department_id: String,
    pub department_name: String,
    pub number_of_component: usize,
    pub funding_accepted_tools: i64,
    pub funding_accepted_incentive: i64,
    pub funding_accepted: i64,
    pub funding_used_tools: i64,
    pub funding_used_incentive: i64,
    pub funding_used: i64,
    pub used_percentage: Percentage,
}

pub fn summarize_usage(proposal: &Proposal, tables: &FundingTables) -> UsageSummary {
    let tools = reduce(&tables.tools, &TOOLS_REPORT);
    let incentive = reduce(&tables.incentive, &INCENTIVE_REPORT);

    let funding_accepted_tools = tools.get(Role::Accepted);
    let funding_accepted_incentive = incentive.get(Role::Accepted);
    let funding_used_tools = tools.get(Role::Used);
    let funding_used_incentive = incentive.get(Role::Used);
    let funding_accepted = funding_accepted_tools.saturating_add(funding_accepted_incentive);
    let funding_used = funding_used_tools.saturating_add(funding_used_incentive);

    debug!(
        proposal = %proposal.id,
        funding_accepted,
        funding_used,
        "Summarized fund usage"
    );

    UsageSummary {
        proposal_id: proposal.id.clone(),
        department_id: proposal.department.id.clone(),
        department_name: proposal.department.name.clone(),
        number_of_component: tools.components + incentive.components,
        funding_accepted_tools,
        funding_accepted_incentive,
        funding_accepted,
        funding_used_tools,
        funding_used_incentive,
        funding_used,
        used_percentage: Percentage::of(funding_used, funding_accepted),
    }
}

/// One summary per fund-usage report, in input order
pub fn usage_summaries(proposals: &[Proposal]) -> Vec<UsageSummary> {
    proposals
        .iter()
        .filter_map(|proposal| match &proposal.payload {
            Payload::FundUsageReport(tables) => Some(summarize_usage(proposal, tables)),
            _ => None,
        })
        .collect()
}
