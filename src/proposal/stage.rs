//! Workflow stage discriminant

use serde::{Serialize, Serializer};
use std::fmt;

/// The workflow step a proposal belongs to. It decides the payload shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    ActivityPlanning,
    FundDisbursement,
    FundUsageReport,
    IndicatorReport,
    /// A stage this engine has no reducer for
    Other(String),
}

impl Stage {
    pub const KNOWN: [Stage; 4] = [
        Stage::ActivityPlanning,
        Stage::FundDisbursement,
        Stage::FundUsageReport,
        Stage::IndicatorReport,
    ];

    /// Parse a stage name leniently. Case, `_` and spaces are normalized to
    /// kebab-case; unrecognized names become [`Stage::Other`].
    pub fn parse(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "activity-planning" | "activity" | "planning" => Self::ActivityPlanning,
            "fund-disbursement" | "disbursement" => Self::FundDisbursement,
            "fund-usage-report" | "fund-usage" | "usage-report" | "usage" => Self::FundUsageReport,
            "indicator-report" | "indicator" | "iku" => Self::IndicatorReport,
            _ => Self::Other(name.trim().to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ActivityPlanning => "activity-planning",
            Self::FundDisbursement => "fund-disbursement",
            Self::FundUsageReport => "fund-usage-report",
            Self::IndicatorReport => "indicator-report",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Stage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
