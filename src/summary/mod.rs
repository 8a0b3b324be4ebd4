//! Derived budget figures. Recomputed from scratch on every call.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Category, Expense};

pub const REMAINING_INCOME_LABEL: &str = "Remaining Income";
pub const REMAINING_INCOME_COLOR: &str = "#16a34a";

/// One slice of the spending chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlice {
    pub name: String,
    pub value: Decimal,
    /// `#rrggbb`
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub income: Decimal,
    pub total: Decimal,
    /// Income minus total. Negative when overspent.
    pub remaining: Decimal,
    /// Zero when income is not positive, else rounded to two decimals.
    pub percent_spent: Decimal,
    /// In order of first appearance in the ledger.
    pub category_subtotals: Vec<(Category, Decimal)>,
    pub chart: Vec<ChartSlice>,
}

impl Summary {
    pub fn is_overspent(&self) -> bool {
        self.remaining < Decimal::ZERO
    }

    /// `"32.00"`, or a bare `"0"` when there is no income to divide by.
    pub fn percent_spent_label(&self) -> String {
        if self.income <= Decimal::ZERO {
            "0".to_string()
        } else {
            format!("{:.2}", self.percent_spent)
        }
    }
}

pub fn summarize(income: Decimal, expenses: &[Expense]) -> Summary {
    let total = expenses
        .iter()
        .filter_map(Expense::parsed_amount)
        .fold(Decimal::ZERO, saturating_add);

    let remaining = income.checked_sub(total).unwrap_or(Decimal::MIN);

    let percent_spent = if income <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        total
            .checked_div(income)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    let mut category_subtotals: Vec<(Category, Decimal)> = Vec::new();
    for expense in expenses {
        let (Some(category), Some(amount)) = (expense.category, expense.parsed_amount()) else {
            continue;
        };
        match category_subtotals.iter_mut().find(|(c, _)| *c == category) {
            Some((_, subtotal)) => *subtotal = saturating_add(*subtotal, amount),
            None => category_subtotals.push((category, amount)),
        }
    }

    let mut chart: Vec<ChartSlice> = category_subtotals
        .iter()
        .map(|(category, value)| ChartSlice {
            name: category.as_str().to_string(),
            value: *value,
            color: category.color(),
        })
        .collect();

    if income > Decimal::ZERO {
        chart.push(ChartSlice {
            name: REMAINING_INCOME_LABEL.to_string(),
            value: remaining.max(Decimal::ZERO),
            color: REMAINING_INCOME_COLOR,
        });
    }

    Summary {
        income,
        total,
        remaining,
        percent_spent,
        category_subtotals,
        chart,
    }
}

/// Amounts are non-negative, so overflow pins to the largest value.
fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::MAX)
}

#[cfg(test)]
mod tests;
