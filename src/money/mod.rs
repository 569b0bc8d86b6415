//! Monetary primitives shared by every reducer
//!
//! Cells from the proposal tables are user-entered text. [`parse_amount`]
//! coerces anything that is not an integer literal to zero, and
//! [`format_rupiah`] renders amounts the way the summary tables show them.

pub mod parse;
pub mod ratio;
pub mod rupiah;

pub use parse::{is_present, parse_amount};
pub use ratio::{mean, round2, Percentage};
pub use rupiah::{format_amount, format_rupiah, Rupiah, RUPIAH_PREFIX};
