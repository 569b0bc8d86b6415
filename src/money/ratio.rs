//! Percentages and averages with a defined zero-denominator result

use serde::{Serialize, Serializer};
use std::fmt;

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        0.0
    }
}

/// `sum / count` rounded to two decimals, or `0.0` for an empty set
pub fn mean(sum: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        round2(sum as f64 / count as f64)
    }
}

/// A percentage rounded to two decimals.
///
/// Serializes as its two-decimal text (`"42.86"`), which is how the summary
/// tables display it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0.0);

    /// `numerator / denominator * 100`, defined as zero when the denominator is zero
    pub fn of(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        Self(round2(numerator as f64 / denominator as f64 * 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
