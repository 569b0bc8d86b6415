//! Positional tables
//!
//! Proposal payloads carry funding and indicator data as arrays of arrays of
//! text. This module decodes them tolerantly ([`cell`]), names every column
//! per table kind ([`layout`]), sums columns by role ([`reducer`]) and
//! exposes typed row views ([`lines`]).

pub mod cell;
pub mod layout;
pub mod lines;
pub mod reducer;

pub use cell::{Cell, PositionalTable, Row};
pub use layout::{
    Column, Gate, Layout, Role, TableKind, ACCEPTED_SENTINEL, ACTIVITY_FUNDING,
    INCENTIVE_PROPOSAL, INCENTIVE_REPORT, INDICATOR, TOOLS_PROPOSAL, TOOLS_REPORT,
};
pub use lines::{FundingLine, IndicatorLine, Line, UsageLine};
pub use reducer::{reduce, Reducer, Totals};
