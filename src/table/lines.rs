//! Typed views of table rows, decoded through the same layouts as the reducer

use super::cell::{Cell, PositionalTable};
use super::layout::{Layout, Role};
use serde::Serialize;

/// A row type decodable from raw cells under a layout
pub trait Line: Sized {
    fn decode(row: &[Cell], layout: &Layout) -> Self;
}

/// A proposed cost line (activity funding, tools or incentive proposal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingLine {
    pub label: Option<String>,
    pub amount: i64,
    pub accepted: bool,
}

impl Line for FundingLine {
    fn decode(row: &[Cell], layout: &Layout) -> Self {
        Self {
            label: layout.label(row).map(str::to_string),
            amount: layout.amount(row, Role::Amount),
            accepted: layout.is_gate_open(row),
        }
    }
}

/// A realised cost line from a usage report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLine {
    pub label: Option<String>,
    pub accepted: i64,
    pub used: i64,
}

impl Line for UsageLine {
    fn decode(row: &[Cell], layout: &Layout) -> Self {
        Self {
            label: layout.label(row).map(str::to_string),
            accepted: layout.amount(row, Role::Accepted),
            used: layout.amount(row, Role::Used),
        }
    }
}

/// One performance indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorLine {
    pub label: Option<String>,
    pub baseline: i64,
    pub target_this_year: i64,
    pub realization: i64,
    pub target_next_year: i64,
}

impl Line for IndicatorLine {
    fn decode(row: &[Cell], layout: &Layout) -> Self {
        Self {
            label: layout.label(row).map(str::to_string),
            baseline: layout.amount(row, Role::Baseline),
            target_this_year: layout.amount(row, Role::TargetThisYear),
            realization: layout.amount(row, Role::Realization),
            target_next_year: layout.amount(row, Role::TargetNextYear),
        }
    }
}

impl PositionalTable {
    /// Decode every row as `L`
    pub fn lines<L: Line>(&self, layout: &Layout) -> Vec<L> {
        self.rows().iter().map(|row| L::decode(row, layout)).collect()
    }
}
