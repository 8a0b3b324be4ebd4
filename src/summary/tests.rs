#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::ExpenseId;

fn expense(n: i64, amount: &str, category: Option<Category>) -> Expense {
    Expense {
        id: ExpenseId::from_millis(n),
        title: format!("item {n}"),
        amount: amount.into(),
        category,
    }
}

fn slice(name: &str, value: Decimal) -> (String, Decimal) {
    (name.to_string(), value)
}

fn slices(summary: &Summary) -> Vec<(String, Decimal)> {
    summary
        .chart
        .iter()
        .map(|s| (s.name.clone(), s.value))
        .collect()
}

// ── scenarios ─────────────────────────────────────────────────

#[test]
fn test_food_and_bills_scenario() {
    let expenses = vec![
        expense(1, "500", Some(Category::Food)),
        expense(2, "300", Some(Category::Bills)),
    ];
    let summary = summarize(dec!(2500), &expenses);

    assert_eq!(summary.total, dec!(800));
    assert_eq!(summary.remaining, dec!(1700));
    assert_eq!(summary.percent_spent_label(), "32.00");
    assert_eq!(
        slices(&summary),
        vec![
            slice("Food", dec!(500)),
            slice("Bills", dec!(300)),
            slice(REMAINING_INCOME_LABEL, dec!(1700)),
        ]
    );
    assert_eq!(summary.chart[0].color, "#ff8000");
    assert_eq!(summary.chart[1].color, "#ff0000");
    assert_eq!(summary.chart[2].color, REMAINING_INCOME_COLOR);
}

#[test]
fn test_zero_income_has_no_remaining_slice() {
    let expenses = vec![expense(1, "40", Some(Category::Food))];
    let summary = summarize(Decimal::ZERO, &expenses);

    assert_eq!(summary.percent_spent, Decimal::ZERO);
    assert_eq!(summary.percent_spent_label(), "0");
    assert_eq!(summary.remaining, dec!(-40));
    assert!(summary
        .chart
        .iter()
        .all(|s| s.name != REMAINING_INCOME_LABEL));
}

#[test]
fn test_empty_ledger() {
    let summary = summarize(dec!(1000), &[]);
    assert_eq!(summary.total, Decimal::ZERO);
    assert_eq!(summary.percent_spent_label(), "0.00");
    assert_eq!(slices(&summary), vec![slice(REMAINING_INCOME_LABEL, dec!(1000))]);
}

// ── totals ────────────────────────────────────────────────────

#[test]
fn test_total_ignores_unparseable_amounts() {
    let expenses = vec![
        expense(1, "", Some(Category::Food)),
        expense(2, ".", None),
        expense(3, "12.5", None),
        expense(4, "1.2.3", Some(Category::Bills)),
    ];
    let summary = summarize(dec!(100), &expenses);
    assert_eq!(summary.total, dec!(13.7));
}

#[test]
fn test_total_independent_of_order() {
    let mut expenses = vec![
        expense(1, "10", Some(Category::Food)),
        expense(2, "2.5", Some(Category::Bills)),
        expense(3, "99", None),
        expense(4, "0.75", Some(Category::Miscellaneous)),
    ];
    let forward = summarize(dec!(500), &expenses).total;
    expenses.reverse();
    let backward = summarize(dec!(500), &expenses).total;
    assert_eq!(forward, dec!(112.25));
    assert_eq!(forward, backward);
}

#[test]
fn test_percent_rounds_to_two_decimals() {
    let expenses = vec![expense(1, "1", None)];
    let summary = summarize(dec!(3), &expenses);
    assert_eq!(summary.percent_spent, dec!(33.33));
}

// ── categories ────────────────────────────────────────────────

#[test]
fn test_subtotals_group_and_skip_uncategorized() {
    let expenses = vec![
        expense(1, "20", Some(Category::Entertainment)),
        expense(2, "5", Some(Category::Food)),
        expense(3, "15", Some(Category::Entertainment)),
        expense(4, "100", None),
        expense(5, "", Some(Category::Bills)),
    ];
    let summary = summarize(dec!(1000), &expenses);
    assert_eq!(
        summary.category_subtotals,
        vec![(Category::Entertainment, dec!(35)), (Category::Food, dec!(5))]
    );
    assert_eq!(summary.total, dec!(140));
}

#[test]
fn test_subtotals_plus_remaining_reproduce_income() {
    let expenses = vec![
        expense(1, "120.5", Some(Category::Food)),
        expense(2, "80", Some(Category::Bills)),
        expense(3, "49.5", Some(Category::Miscellaneous)),
    ];
    let summary = summarize(dec!(750), &expenses);
    let charted: Decimal = summary.chart.iter().map(|s| s.value).sum();
    assert_eq!(charted, dec!(750));
}

// ── overspending ──────────────────────────────────────────────

#[test]
fn test_overspent_clamps_chart_not_remaining() {
    let expenses = vec![
        expense(1, "900", Some(Category::Bills)),
        expense(2, "300", Some(Category::Food)),
    ];
    let summary = summarize(dec!(1000), &expenses);

    assert!(summary.is_overspent());
    assert_eq!(summary.remaining, dec!(-200));
    assert_eq!(summary.percent_spent_label(), "120.00");

    let remaining_slice = summary
        .chart
        .iter()
        .find(|s| s.name == REMAINING_INCOME_LABEL)
        .unwrap();
    assert_eq!(remaining_slice.value, Decimal::ZERO);
    assert!(summary.chart.iter().all(|s| s.value >= Decimal::ZERO));
}

#[test]
fn test_huge_amounts_against_tiny_income_do_not_overflow() {
    let huge = "9999999999999999999999999";
    let expenses = vec![
        expense(1, huge, Some(Category::Bills)),
        expense(2, huge, Some(Category::Bills)),
        expense(3, huge, Some(Category::Food)),
    ];
    let summary = summarize(dec!(0.01), &expenses);

    assert_eq!(summary.total, dec!(29999999999999999999999997));
    assert!(summary.is_overspent());
    assert_eq!(summary.percent_spent, Decimal::MAX);
    assert_eq!(summary.chart.last().unwrap().value, Decimal::ZERO);
}

#[test]
fn test_total_saturates_at_decimal_max() {
    let max = Decimal::MAX.to_string();
    let expenses = vec![
        expense(1, &max, Some(Category::Food)),
        expense(2, &max, Some(Category::Food)),
    ];
    let summary = summarize(dec!(100), &expenses);

    assert_eq!(summary.total, Decimal::MAX);
    assert_eq!(summary.category_subtotals, vec![(Category::Food, Decimal::MAX)]);
    assert_eq!(summary.remaining, dec!(100) - Decimal::MAX);
}
