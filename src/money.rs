use rust_decimal::{Decimal, RoundingStrategy};

/// Insert a comma between every group of three digits, counting from the right.
/// e.g. `"1234567"` → `"1,234,567"`
pub fn group_thousands(int_part: &str) -> String {
    int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a non-negative number with thousand separators, at least `min_frac`
/// and at most three fraction digits (trailing zeros trimmed down to `min_frac`).
/// e.g. `1234.50` with `min_frac = 0` → `"1,234.5"`
pub fn format_grouped(val: Decimal, min_frac: usize) -> String {
    let rounded = val
        .abs()
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{rounded:.3}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("");

    let mut frac = dec_part.trim_end_matches('0').to_string();
    while frac.len() < min_frac {
        frac.push('0');
    }

    let with_commas = group_thousands(int_part);
    if frac.is_empty() {
        with_commas
    } else {
        format!("{with_commas}.{frac}")
    }
}

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`, `-42.5` → `"-$42.50"`
pub fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas = group_thousands(int_part);

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
