//! Rupiah Formatter: Indonesian thousands grouping for display

use serde::{Serialize, Serializer};
use std::fmt;

pub const RUPIAH_PREFIX: &str = "Rp. ";
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Format an amount given as text.
///
/// Everything except digits and the decimal comma is discarded first, so the
/// formatter accepts its own grouped output. The integer part is grouped in
/// thousands with `.`; a fractional part, when present, follows `,`.
///
/// ```
/// use proposal_recap::money::format_rupiah;
///
/// assert_eq!(format_rupiah("1234567"), "Rp. 1.234.567");
/// assert_eq!(format_rupiah("Rp. 1.234.567"), "Rp. 1.234.567");
/// assert_eq!(format_rupiah("2500,75"), "Rp. 2.500,75");
/// ```
pub fn format_rupiah(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == DECIMAL_SEPARATOR)
        .collect();

    let (integer, fraction) = match cleaned.split_once(DECIMAL_SEPARATOR) {
        Some((integer, fraction)) => (integer, Some(fraction.replace(DECIMAL_SEPARATOR, ""))),
        None => (cleaned.as_str(), None),
    };

    let mut out = String::from(RUPIAH_PREFIX);
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(&fraction);
    }
    out
}

/// Format an integer amount. Negative amounts keep their sign after the prefix.
pub fn format_amount(amount: i64) -> String {
    let grouped = group_thousands(&amount.unsigned_abs().to_string());
    if amount < 0 {
        format!("{RUPIAH_PREFIX}-{grouped}")
    } else {
        format!("{RUPIAH_PREFIX}{grouped}")
    }
}

/// Group a run of ASCII digits in thousands.
///
/// Leading zeros are dropped and an empty run renders as `0`.
fn group_thousands(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }

    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..head]);
    for (i, chunk) in digits.as_bytes()[head..].chunks(3).enumerate() {
        if head > 0 || i > 0 {
            out.push(GROUP_SEPARATOR);
        }
        // chunks of an ASCII digit string are valid UTF-8
        out.extend(chunk.iter().map(|b| *b as char));
    }
    out
}

/// An integer amount that renders in Rupiah
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Rupiah(pub i64);

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}

impl Serialize for Rupiah {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<i64> for Rupiah {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}
