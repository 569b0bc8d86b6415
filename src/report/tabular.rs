//! Flattening summary records into rows of typed fields

use crate::aggregate::{ActivitySummary, EventSummary};
use crate::money::{Percentage, Rupiah};
use crate::summary::{DisbursementSummary, IndicatorSummary, StageSummary, UsageSummary};

/// A column: machine key (JSON/CSV) and human title (text table)
pub type Header = (&'static str, &'static str);

/// One rendered value
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Count(usize),
    Money(i64),
    Percent(Percentage),
    Number(f64),
}

impl Field {
    /// Plain form used in CSV
    pub fn raw(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Count(count) => count.to_string(),
            Self::Money(amount) => amount.to_string(),
            Self::Percent(pct) => pct.to_string(),
            Self::Number(value) => format!("{value:.2}"),
        }
    }

    /// Human form used in text tables
    pub fn display(&self) -> String {
        match self {
            Self::Money(amount) => Rupiah(*amount).to_string(),
            Self::Percent(pct) => format!("{pct}%"),
            other => other.raw(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

/// A record that can be laid out as one table row
pub trait Tabular {
    fn headers(&self) -> &'static [Header];
    fn fields(&self) -> Vec<Field>;
}

const ACTIVITY_HEADERS: &[Header] = &[
    ("proposalId", "Proposal"),
    ("departmentName", "Department"),
    ("code", "Code"),
    ("title", "Activity"),
    ("numberOfSubActivity", "Sub-activities"),
    ("numberOfSubActivityPlan", "Planned"),
    ("numberOfSubActivityStarted", "Started"),
    ("numberOfSubActivityFinished", "Finished"),
    ("funding", "Funding"),
];

impl Tabular for ActivitySummary {
    fn headers(&self) -> &'static [Header] {
        ACTIVITY_HEADERS
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::Text(self.proposal_id.clone()),
            Field::Text(self.department_name.clone()),
            Field::Text(self.code.clone()),
            Field::Text(self.title.clone()),
            Field::Count(self.number_of_sub_activity),
            Field::Count(self.number_of_sub_activity_plan),
            Field::Count(self.number_of_sub_activity_started),
            Field::Count(self.number_of_sub_activity_finished),
            Field::Money(self.funding),
        ]
    }
}

const EVENT_HEADERS: &[Header] = &[
    ("departmentId", "Department id"),
    ("departmentName", "Department"),
    ("numberOfActivity", "Activities"),
    ("numberOfSubActivity", "Sub-activities"),
    ("numberOfSubActivityPlan", "Planned"),
    ("numberOfSubActivityStarted", "Started"),
    ("numberOfSubActivityFinished", "Finished"),
    ("funding", "Funding"),
];

impl Tabular for EventSummary {
    fn headers(&self) -> &'static [Header] {
        EVENT_HEADERS
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::Text(self.department_id.clone()),
            Field::Text(self.department_name.clone()),
            Field::Count(self.number_of_activity),
            Field::Count(self.number_of_sub_activity),
            Field::Count(self.number_of_sub_activity_plan),
            Field::Count(self.number_of_sub_activity_started),
            Field::Count(self.number_of_sub_activity_finished),
            Field::Money(self.funding),
        ]
    }
}

const DISBURSEMENT_HEADERS: &[Header] = &[
    ("proposalId", "Proposal"),
    ("departmentName", "Department"),
    ("numberOfComponentProposal", "Components"),
    ("fundingProposalTools", "Tools"),
    ("fundingProposalIncentive", "Incentive"),
    ("fundingProposal", "Proposed"),
    ("fundingAccepted", "Accepted"),
    ("acceptedPercentage", "Accepted %"),
];

impl Tabular for DisbursementSummary {
    fn headers(&self) -> &'static [Header] {
        DISBURSEMENT_HEADERS
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::Text(self.proposal_id.clone()),
            Field::Text(self.department_name.clone()),
            Field::Count(self.number_of_component_proposal),
            Field::Money(self.funding_proposal_tools),
            Field::Money(self.funding_proposal_incentive),
            Field::Money(self.funding_proposal),
            Field::Money(self.funding_accepted),
            Field::Percent(self.accepted_percentage),
        ]
    }
}

const USAGE_HEADERS: &[Header] = &[
    ("proposalId", "Proposal"),
    ("departmentName", "Department"),
    ("numberOfComponent", "Components"),
    ("fundingAcceptedTools", "Accepted tools"),
    ("fundingAcceptedIncentive", "Accepted incentive"),
    ("fundingAccepted", "Accepted"),
    ("fundingUsedTools", "Used tools"),
    ("fundingUsedIncentive", "Used incentive"),
    ("fundingUsed", "Used"),
    ("usedPercentage", "Used %"),
];

impl Tabular for UsageSummary {
    fn headers(&self) -> &'static [Header] {
        USAGE_HEADERS
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::Text(self.proposal_id.clone()),
            Field::Text(self.department_name.clone()),
            Field::Count(self.number_of_component),
            Field::Money(self.funding_accepted_tools),
            Field::Money(self.funding_accepted_incentive),
            Field::Money(self.funding_accepted),
            Field::Money(self.funding_used_tools),
            Field::Money(self.funding_used_incentive),
            Field::Money(self.funding_used),
            Field::Percent(self.used_percentage),
        ]
    }
}

const INDICATOR_HEADERS: &[Header] = &[
    ("proposalId", "Proposal"),
    ("departmentName", "Department"),
    ("numberOfIndicator", "Indicators"),
    ("baseline", "Baseline"),
    ("targetThisYear", "Target"),
    ("realizationThisYear", "Realization"),
    ("targetNextYear", "Next target"),
    ("achievementPercentage", "Achievement %"),
];

impl Tabular for IndicatorSummary {
    fn headers(&self) -> &'static [Header] {
        INDICATOR_HEADERS
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::Text(self.proposal_id.clone()),
            Field::Text(self.department_name.clone()),
            Field::Count(self.number_of_indicator),
            Field::Number(self.baseline),
            Field::Number(self.target_this_year),
            Field::Number(self.realization_this_year),
            Field::Number(self.target_next_year),
            Field::Percent(self.achievement_percentage),
        ]
    }
}

impl Tabular for StageSummary {
    fn headers(&self) -> &'static [Header] {
        match self {
            Self::Activity(s) => s.headers(),
            Self::Event(s) => s.headers(),
            Self::Disbursement(s) => s.headers(),
            Self::Usage(s) => s.headers(),
            Self::Indicator(s) => s.headers(),
        }
    }

    fn fields(&self) -> Vec<Field> {
        match self {
            Self::Activity(s) => s.fields(),
            Self::Event(s) => s.fields(),
            Self::Disbursement(s) => s.fields(),
            Self::Usage(s) => s.fields(),
            Self::Indicator(s) => s.fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_forms() {
        assert_eq!(Field::Money(1_500_000).raw(), "1500000");
        assert_eq!(Field::Money(1_500_000).display(), "Rp. 1.500.000");
        assert_eq!(Field::Percent(Percentage::of(3, 7)).display(), "42.86%");
        assert_eq!(Field::Number(13.333).raw(), "13.33");
        assert!(!Field::Text("x".into()).is_numeric());
    }

    #[test]
    fn test_headers_match_field_count() {
        let usage = UsageSummary {
            proposal_id: "u".into(),
            department_id: "d".into(),
            department_name: "D".into(),
            number_of_component: 0,
            funding_accepted_tools: 0,
            funding_accepted_incentive: 0,
            funding_accepted: 0,
            funding_used_tools: 0,
            funding_used_incentive: 0,
            funding_used: 0,
            used_percentage: Percentage::ZERO,
        };
        let summary = StageSummary::Usage(usage);
        assert_eq!(summary.headers().len(), summary.fields().len());
    }
}
