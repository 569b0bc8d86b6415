//! Fund-disbursement summaries

use crate::money::Percentage;
use crate::proposal::{FundingTables, Payload, Proposal};
use crate::table::{reduce, Role, INCENTIVE_PROPOSAL, TOOLS_PROPOSAL};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisbursementSummary {
    pub proposal_id: String,
    pub department_id: String,
    pub department_name: String,
    pub number_of_component_proposal: usize,
    pub funding_proposal_tools: i64,
    pub funding_proposal_incentive: i64,
    pub funding_proposal: i64,
    pub funding_accepted: i64,
    pub accepted_percentage: Percentage,
}

pub fn summarize_disbursement(proposal: &Proposal, tables: &FundingTables) -> DisbursementSummary {
    let tools = reduce(&tables.tools, &TOOLS_PROPOSAL);
    let incentive = reduce(&tables.incentive, &INCENTIVE_PROPOSAL);

    let funding_proposal_tools = tools.get(Role::Amount);
    let funding_proposal_incentive = incentive.get(Role::Amount);
    let funding_proposal = funding_proposal_tools.saturating_add(funding_proposal_incentive);
    let funding_accepted = tools
        .get(Role::Accepted)
        .saturating_add(incentive.get(Role::Accepted));

    debug!(
        proposal = %proposal.id,
        funding_proposal,
        funding_accepted,
        "Summarized fund disbursement"
    );

    DisbursementSummary {
        proposal_id: proposal.id.clone(),
        department_id: proposal.department.id.clone(),
        department_name: proposal.department.name.clone(),
        number_of_component_proposal: tools.components + incentive.components,
        funding_proposal_tools,
        funding_proposal_incentive,
        funding_proposal,
        funding_accepted,
        accepted_percentage: Percentage::of(funding_accepted, funding_proposal),
    }
}

/// One summary per fund-disbursement proposal, in input order
pub fn disbursement_summaries(proposals: &[Proposal]) -> Vec<DisbursementSummary> {
    proposals
        .iter()
        .filter_map(|proposal| match &proposal.payload {
            Payload::FundDisbursement(tables) => Some(summarize_disbursement(proposal, tables)),
            _ => None,
        })
        .collect()
}
