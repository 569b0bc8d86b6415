//! Column layouts: the one place that maps a column index to its meaning
//!
//! Every table kind gets a `const` [`Layout`]. The reducer and the typed line
//! decoders both read cells through these constants, and each constant is
//! checked at compile time for overlapping columns.

use super::cell::Cell;
use crate::money::parse_amount;
use serde::Serialize;
use std::fmt;

/// Semantic role of a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Amount,
    Accepted,
    Used,
    Baseline,
    TargetThisYear,
    Realization,
    TargetNextYear,
}

/// Table kinds found in proposal payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    ActivityFunding,
    ToolsProposal,
    IncentiveProposal,
    ToolsReport,
    IncentiveReport,
    Indicator,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ActivityFunding => "activity-funding",
            Self::ToolsProposal => "tools-proposal",
            Self::IncentiveProposal => "incentive-proposal",
            Self::ToolsReport => "tools-report",
            Self::IncentiveReport => "incentive-report",
            Self::Indicator => "indicator",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub role: Role,
    pub index: usize,
}

/// Acceptance gate: `from` is also accumulated into `into` when the flag
/// cell equals `sentinel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub flag: usize,
    pub sentinel: &'static str,
    pub from: Role,
    pub into: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub kind: TableKind,
    /// Free-text column naming the row
    pub label: usize,
    pub columns: &'static [Column],
    /// Role whose presence makes a row count as a component
    pub primary: Role,
    pub gate: Option<Gate>,
}

/// Flag value meaning "accepted" in proposal-stage tables
pub const ACCEPTED_SENTINEL: &str = "1";

const fn col(role: Role, index: usize) -> Column {
    Column { role, index }
}

pub const ACTIVITY_FUNDING: Layout = Layout {
    kind: TableKind::ActivityFunding,
    label: 0,
    columns: &[col(Role::Amount, 3)],
    primary: Role::Amount,
    gate: None,
};

pub const TOOLS_PROPOSAL: Layout = Layout {
    kind: TableKind::ToolsProposal,
    label: 0,
    columns: &[col(Role::Amount, 4)],
    primary: Role::Amount,
    gate: Some(Gate {
        flag: 5,
        sentinel: ACCEPTED_SENTINEL,
        from: Role::Amount,
        into: Role::Accepted,
    }),
};

pub const INCENTIVE_PROPOSAL: Layout = Layout {
    kind: TableKind::IncentiveProposal,
    label: 0,
    columns: &[col(Role::Amount, 2)],
    primary: Role::Amount,
    gate: Some(Gate {
        flag: 3,
        sentinel: ACCEPTED_SENTINEL,
        from: Role::Amount,
        into: Role::Accepted,
    }),
};

pub const TOOLS_REPORT: Layout = Layout {
    kind: TableKind::ToolsReport,
    label: 0,
    columns: &[col(Role::Accepted, 2), col(Role::Used, 3)],
    primary: Role::Accepted,
    gate: None,
};

pub const INCENTIVE_REPORT: Layout = Layout {
    kind: TableKind::IncentiveReport,
    label: 0,
    columns: &[col(Role::Accepted, 2), col(Role::Used, 3)],
    primary: Role::Accepted,
    gate: None,
};

pub const INDICATOR: Layout = Layout {
    kind: TableKind::Indicator,
    label: 0,
    columns: &[
        col(Role::Baseline, 2),
        col(Role::TargetThisYear, 3),
        col(Role::Realization, 4),
        col(Role::TargetNextYear, 5),
    ],
    primary: Role::Baseline,
    gate: None,
};

const _: () = assert!(ACTIVITY_FUNDING.is_consistent());
const _: () = assert!(TOOLS_PROPOSAL.is_consistent());
const _: () = assert!(INCENTIVE_PROPOSAL.is_consistent());
const _: () = assert!(TOOLS_REPORT.is_consistent());
const _: () = assert!(INCENTIVE_REPORT.is_consistent());
const _: () = assert!(INDICATOR.is_consistent());

impl Layout {
    /// Column index of `role`, if this layout stores it
    pub const fn index_of(&self, role: Role) -> Option<usize> {
        let mut i = 0;
        while i < self.columns.len() {
            if self.columns[i].role as u8 == role as u8 {
                return Some(self.columns[i].index);
            }
            i += 1;
        }
        None
    }

    /// No two columns share an index or a role, the label and gate flag stay
    /// clear of numeric columns, and the primary role is stored.
    pub const fn is_consistent(&self) -> bool {
        if self.index_of(self.primary).is_none() {
            return false;
        }
        let mut i = 0;
        while i < self.columns.len() {
            let a = self.columns[i];
            if a.index == self.label {
                return false;
            }
            if let Some(gate) = self.gate {
                if a.index == gate.flag || gate.flag == self.label {
                    return false;
                }
            }
            let mut j = i + 1;
            while j < self.columns.len() {
                let b = self.columns[j];
                if a.index == b.index || a.role as u8 == b.role as u8 {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    /// Raw text of the cell holding `role`; `None` when the layout does not
    /// store it or the row is too short
    pub fn cell<'a>(&self, row: &'a [Cell], role: Role) -> Option<&'a str> {
        self.index_of(role)
            .and_then(|index| row.get(index))
            .and_then(Cell::text)
    }

    /// Parsed amount of the cell holding `role`
    pub fn amount(&self, row: &[Cell], role: Role) -> i64 {
        parse_amount(self.cell(row, role))
    }

    pub fn label<'a>(&self, row: &'a [Cell]) -> Option<&'a str> {
        row.get(self.label)
            .and_then(Cell::text)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Whether the gate flag of `row` is set. Layouts without a gate are never open.
    pub fn is_gate_open(&self, row: &[Cell]) -> bool {
        self.gate.is_some_and(|gate| {
            row.get(gate.flag)
                .and_then(Cell::text)
                .is_some_and(|flag| flag.trim() == gate.sentinel)
        })
    }
}
