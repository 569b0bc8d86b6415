//! Money Parser: tolerant integer parsing of user-entered cells

/// Parse a raw cell into an integer amount.
///
/// Blank, absent and non-integer cells all contribute `0`. Surrounding
/// whitespace is ignored; anything else (grouping separators, decimals, stray
/// text) makes the cell invalid.
pub fn parse_amount(cell: Option<&str>) -> i64 {
    cell.map(str::trim)
        .filter(|text| !text.is_empty())
        .and_then(|text| text.parse::<i64>().ok())
        .unwrap_or(0)
}

/// Whether a cell carries any non-whitespace content at all
pub fn is_present(cell: Option<&str>) -> bool {
    cell.is_some_and(|text| !text.trim().is_empty())
}
