use rust_decimal::Decimal;
use std::str::FromStr;

use super::Category;

/// Identity of a ledger row, derived from its creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(i64);

impl ExpenseId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }
}

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    /// Raw amount as typed: digits and dots only.
    pub amount: String,
    pub category: Option<Category>,
}

impl Expense {
    /// A blank row, as created by the "add expense" action.
    pub fn new(id: ExpenseId) -> Self {
        Self {
            id,
            title: String::new(),
            amount: String::new(),
            category: None,
        }
    }

    pub fn parsed_amount(&self) -> Option<Decimal> {
        parse_amount(&self.amount)
    }
}

/// Lenient decimal parse: reads the longest leading `digits[.digits]` prefix
/// and ignores the rest, so `"12.3.4"` is 12.3 and `".5"` is 0.5.
/// Returns `None` when no digit leads the string (e.g. `""`, `"."`, `"abc"`).
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim_start();
    let int_len = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    let int_part = &s[..int_len];
    let rest = &s[int_len..];

    let frac_part = match rest.strip_prefix('.') {
        Some(after) => {
            let frac_len = after.bytes().take_while(|b| b.is_ascii_digit()).count();
            &after[..frac_len]
        }
        None => "",
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let normalized = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };
    Decimal::from_str(&normalized).ok()
}
