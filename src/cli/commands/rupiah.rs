use crate::money::{format_amount, format_rupiah};
use anyhow::Result;
use std::io::Write;

/// Execute `proposal-recap rupiah`.
///
/// Whole integers, negative ones included, go through the amount formatter;
/// any other text is formatted from its digits and decimal comma.
pub fn run_rupiah_command(amount: &str, out: &mut impl Write) -> Result<()> {
    let rendered = match amount.trim().parse::<i64>() {
        Ok(value) => format_amount(value),
        Err(_) => format_rupiah(amount),
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(amount: &str) -> String {
        let mut out = Vec::new();
        run_rupiah_command(amount, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rupiah_command() {
        assert_eq!(run("1234567"), "Rp. 1.234.567\n");
        assert_eq!(run("-1500"), "Rp. -1.500\n");
        assert_eq!(run("1.500.000"), "Rp. 1.500.000\n");
        assert_eq!(run("abc"), "Rp. 0\n");
    }
}
