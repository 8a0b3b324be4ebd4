#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── group_thousands ───────────────────────────────────────────

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands("0"), "0");
    assert_eq!(group_thousands("999"), "999");
    assert_eq!(group_thousands("1000"), "1,000");
    assert_eq!(group_thousands("1234567"), "1,234,567");
}

// ── format_grouped ────────────────────────────────────────────

#[test]
fn test_format_grouped_trims_trailing_zeros() {
    assert_eq!(format_grouped(dec!(2500), 0), "2,500");
    assert_eq!(format_grouped(dec!(2500.50), 0), "2,500.5");
    assert_eq!(format_grouped(dec!(0.25), 0), "0.25");
}

#[test]
fn test_format_grouped_pads_to_minimum() {
    assert_eq!(format_grouped(dec!(100000), 2), "100,000.00");
    assert_eq!(format_grouped(dec!(100000.5), 2), "100,000.50");
}

#[test]
fn test_format_grouped_rounds_to_three_places() {
    assert_eq!(format_grouped(dec!(1.2345), 0), "1.235");
    assert_eq!(format_grouped(dec!(1.9996), 0), "2");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1700)), "$1,700.00");
    assert_eq!(format_amount(dec!(999.9)), "$999.90");
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-200)), "-$200.00");
    assert_eq!(format_amount(dec!(-12345.67)), "-$12,345.67");
}
