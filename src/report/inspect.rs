//! Typed line view of a department's tables

use crate::proposal::{Payload, Proposal, Stage};
use crate::table::{
    FundingLine, IndicatorLine, Layout, TableKind, UsageLine, ACTIVITY_FUNDING,
    INCENTIVE_PROPOSAL, INCENTIVE_REPORT, INDICATOR, TOOLS_PROPOSAL, TOOLS_REPORT,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableLines {
    Funding(Vec<FundingLine>),
    Usage(Vec<UsageLine>),
    Indicator(Vec<IndicatorLine>),
}

impl TableLines {
    pub fn len(&self) -> usize {
        match self {
            Self::Funding(lines) => lines.len(),
            Self::Usage(lines) => lines.len(),
            Self::Indicator(lines) => lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectedTable {
    pub table: TableKind,
    /// Code of the owning activity, for activity funding tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    pub lines: TableLines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectedProposal {
    pub proposal_id: String,
    pub department_id: String,
    pub department_name: String,
    pub stage: Stage,
    pub tables: Vec<InspectedTable>,
}

fn funding(layout: &Layout, lines: Vec<FundingLine>, activity: Option<String>) -> InspectedTable {
    InspectedTable {
        table: layout.kind,
        activity,
        lines: TableLines::Funding(lines),
    }
}

fn usage(layout: &Layout, lines: Vec<UsageLine>) -> InspectedTable {
    InspectedTable {
        table: layout.kind,
        activity: None,
        lines: TableLines::Usage(lines),
    }
}

/// Decode every table of `proposal` into typed lines
pub fn inspect_proposal(proposal: &Proposal) -> InspectedProposal {
    let tables = match &proposal.payload {
        Payload::ActivityPlanning(planning) => planning
            .activities
            .iter()
            .map(|activity| {
                funding(
                    &ACTIVITY_FUNDING,
                    activity.funding.lines(&ACTIVITY_FUNDING),
                    activity.code.clone(),
                )
            })
            .collect(),
        Payload::FundDisbursement(tables) => vec![
            funding(&TOOLS_PROPOSAL, tables.tools.lines(&TOOLS_PROPOSAL), None),
            funding(
                &INCENTIVE_PROPOSAL,
                tables.incentive.lines(&INCENTIVE_PROPOSAL),
                None,
            ),
        ],
        Payload::FundUsageReport(tables) => vec![
            usage(&TOOLS_REPORT, tables.tools.lines(&TOOLS_REPORT)),
            usage(&INCENTIVE_REPORT, tables.incentive.lines(&INCENTIVE_REPORT)),
        ],
        Payload::IndicatorReport(data) => vec![InspectedTable {
            table: INDICATOR.kind,
            activity: None,
            lines: TableLines::Indicator(data.indicators.lines(&INDICATOR)),
        }],
        Payload::Other { .. } => Vec::new(),
    };

    InspectedProposal {
        proposal_id: proposal.id.clone(),
        department_id: proposal.department.id.clone(),
        department_name: proposal.department.name.clone(),
        stage: proposal.stage(),
        tables,
    }
}

/// Inspect every proposal whose department id (or, lacking one, name) is `department`
pub fn inspect_department(proposals: &[Proposal], department: &str) -> Vec<InspectedProposal> {
    proposals
        .iter()
        .filter(|p| {
            p.department.id == department
                || (p.department.id.is_empty() && p.department.name == department)
        })
        .map(inspect_proposal)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::{decode_document, DecodeOptions};
    use serde_json::json;

    #[test]
    fn test_department_tables_as_lines() {
        let proposals = decode_document(
            &json!([
                {"id": "1", "department": {"id": "ti"}, "stage": "fund-disbursement", "data": {
                    "tableTools": [["Laptop", "i7", "1", "unit", "10000", "1"]],
                    "tableIncentive": [["Honor", "Ketua", "5000", "0"]]
                }},
                {"id": "2", "department": {"id": "fi"}, "stage": "iku", "data": {"IKU": [["a"]]}},
                {"id": "3", "department": {"id": "ti"}, "stage": "iku", "data": {
                    "IKU": [["IKU-1", "%", "10", "20", "15", "25"]]
                }}
            ]),
            &DecodeOptions::default(),
        )
        .unwrap();

        let inspected = inspect_department(&proposals, "ti");
        assert_eq!(inspected.len(), 2);

        let disbursement = &inspected[0];
        assert_eq!(disbursement.tables[0].table, TableKind::ToolsProposal);
        assert_eq!(
            disbursement.tables[0].lines,
            TableLines::Funding(vec![FundingLine {
                label: Some("Laptop".into()),
                amount: 10000,
                accepted: true,
            }])
        );
        assert_eq!(disbursement.tables[1].lines.len(), 1);

        let json = serde_json::to_value(&inspected[1]).unwrap();
        assert_eq!(json["tables"][0]["table"], "indicator");
        assert_eq!(json["tables"][0]["lines"][0]["targetNextYear"], 25);
    }

    #[test]
    fn test_activity_tables_carry_their_code() {
        let proposals = decode_document(
            &json!([{"id": "1", "department": {"name": "Kimia"}, "stage": "activity-planning",
                "data": {"activityList": [{"code": "K1", "funding": [["Sewa", "1", "hari", "700"]]}]}}]),
            &DecodeOptions::default(),
        )
        .unwrap();

        let inspected = inspect_department(&proposals, "Kimia");
        let table = &inspected[0].tables[0];
        assert_eq!(table.table, TableKind::ActivityFunding);
        assert_eq!(table.activity.as_deref(), Some("K1"));
        assert!(!table.lines.is_empty());
    }
}
