//! Monthly income entry: keystroke filtering, submission and formatting.

use rust_decimal::Decimal;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::parse_amount;
use crate::money::format_grouped;

/// Up to four integer digits, an optional dot, up to two decimals.
static INCOME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{0,4}(\.[0-9]{0,2})?$").ok());

/// Values at or above this threshold always show two decimals.
const FORCED_DECIMALS_THRESHOLD: i64 = 100_000;

/// Drop every character that is not an ASCII digit or a dot.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Whether `candidate` may replace the current income input.
pub fn is_acceptable_input(candidate: &str) -> bool {
    INCOME_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(candidate))
}

/// Format a raw numeric string for display, without the currency symbol.
/// Empty or unparseable input formats to an empty string.
pub fn format_currency(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let Some(number) = parse_amount(&raw.replace(',', "")) else {
        return String::new();
    };
    let min_frac = if number >= Decimal::new(FORCED_DECIMALS_THRESHOLD, 0) {
        2
    } else {
        0
    };
    format_grouped(number, min_frac)
}

/// Turn a submitted `"$1,234.5"` string back into a number; zero on failure.
pub fn parse_submitted(formatted: &str) -> Decimal {
    let stripped: String = formatted
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    parse_amount(&stripped).unwrap_or(Decimal::ZERO)
}

/// The income text field. Holds the raw, already-validated value.
#[derive(Debug, Clone, Default)]
pub struct IncomeSource {
    value: String,
}

impl IncomeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the field with `raw` if it passes the filter.
    /// Rejected input leaves the field untouched and returns `false`.
    pub fn handle_input(&mut self, raw: &str) -> bool {
        let candidate = sanitize(raw);
        if !is_acceptable_input(&candidate) {
            tracing::debug!(raw, "income keystroke rejected");
            return false;
        }
        if candidate == self.value {
            return false;
        }
        self.value = candidate;
        true
    }

    pub fn push_char(&mut self, c: char) -> bool {
        let candidate = format!("{}{c}", self.value);
        self.handle_input(&candidate)
    }

    pub fn pop_char(&mut self) -> bool {
        let mut candidate = self.value.clone();
        if candidate.pop().is_none() {
            return false;
        }
        self.handle_input(&candidate)
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Submission is disabled while the field is empty.
    pub fn can_submit(&self) -> bool {
        !self.value.is_empty()
    }

    /// The currency string emitted to the caller, e.g. `"$2,500"`.
    pub fn submit(&self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let formatted = format!("${}", format_currency(&self.value));
        tracing::info!(income = %formatted, "income submitted");
        Some(formatted)
    }
}
