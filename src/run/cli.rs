use anyhow::Result;

use crate::config::{AppConfig, CliCommand};
use crate::income::{is_acceptable_input, parse_submitted, sanitize, IncomeSource};
use crate::ledger::ExpenseLedger;
use crate::models::Category;
use crate::money::format_amount;
use crate::summary::{summarize, Summary};

pub(crate) fn as_cli(command: CliCommand, config: &AppConfig) -> Result<()> {
    match command {
        CliCommand::Summary { income, expenses } => {
            let report = cli_summary(&income, &expenses, config.amount_max_len)?;
            print!("{report}");
            Ok(())
        }
    }
}

/// Split `title,amount[,category]`. The title may not contain commas.
fn parse_expense_arg(arg: &str) -> Result<(&str, &str, Option<&str>)> {
    let mut parts = arg.splitn(3, ',').map(str::trim);
    let title = parts.next().unwrap_or("");
    let Some(amount) = parts.next() else {
        anyhow::bail!("Expense must look like <title>,<amount>[,<category>]: {arg}");
    };
    let category = parts.next().filter(|c| !c.is_empty());
    Ok((title, amount, category))
}

fn cli_summary(income_raw: &str, expense_args: &[String], amount_max_len: usize) -> Result<String> {
    let candidate = sanitize(income_raw);
    if !is_acceptable_input(&candidate) {
        anyhow::bail!("Income allows up to 4 digits and 2 decimals: {income_raw}");
    }
    let mut income = IncomeSource::new();
    income.handle_input(&candidate);
    let Some(income_display) = income.submit() else {
        anyhow::bail!("Income is required");
    };

    let mut ledger = ExpenseLedger::new(amount_max_len);
    for arg in expense_args {
        let (title, amount, category) = parse_expense_arg(arg)?;
        let id = ledger.add();
        ledger.set_title(id, title);

        if sanitize(amount).chars().count() > ledger.amount_max_len() {
            eprintln!(
                "Warning: amount '{amount}' for '{title}' is longer than {} characters, ignored",
                ledger.amount_max_len()
            );
        } else {
            ledger.set_amount(id, amount);
        }

        if let Some(name) = category {
            match Category::parse(name) {
                Some(c) => {
                    ledger.set_category(id, Some(c));
                }
                None => eprintln!("Warning: unknown category '{name}' for '{title}'"),
            }
        }
    }

    let summary = summarize(parse_submitted(&income_display), ledger.entries());
    tracing::info!(
        expenses = ledger.len(),
        total = %summary.total,
        "summary computed"
    );
    Ok(render_report(&income_display, &summary))
}

fn render_report(income_display: &str, summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str("budgetpie summary\n");
    out.push_str(&format!("{}\n", "─".repeat(40)));
    out.push_str(&format!("  Income:     {income_display}\n"));
    out.push_str(&format!("  Expenses:   -{}\n", format_amount(summary.total)));
    out.push_str(&format!("  Remaining:  {}\n", format_amount(summary.remaining)));
    out.push_str(&format!(
        "  Spent:      {}% Of Income Spent\n",
        summary.percent_spent_label()
    ));

    if !summary.category_subtotals.is_empty() {
        out.push_str("\nSpending by Category:\n");
        for (category, amount) in &summary.category_subtotals {
            out.push_str(&format!(
                "  {:<24} {}\n",
                category.as_str(),
                format_amount(*amount)
            ));
        }
    }

    if summary.is_overspent() {
        out.push_str("\nOverspent: expenses exceed income.\n");
    }
    out
}
