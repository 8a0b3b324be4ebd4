use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Focus};
use crate::income::{is_acceptable_input, sanitize};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit budgetpie", cmd_quit, r);
    register_command!("quit", "Quit budgetpie", cmd_quit, r);
    register_command!("a", "Add an expense row", cmd_add, r);
    register_command!("add", "Add an expense row", cmd_add, r);
    register_command!("del", "Delete selected expense (asks first)", cmd_delete, r);
    register_command!("delete", "Delete selected expense (asks first)", cmd_delete, r);
    register_command!(
        "i",
        "Set monthly income (e.g. :i 2500)",
        cmd_income,
        r
    );
    register_command!(
        "income",
        "Set monthly income (e.g. :income 2500)",
        cmd_income,
        r
    );
    register_command!("theme", "Toggle dark/light mode", cmd_theme, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // single-letter aliases make poor suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_add(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.add_expense();
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.focus = Focus::Expenses;
    app.request_delete();
    Ok(())
}

fn cmd_income(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :income <amount>");
        return Ok(());
    }
    let candidate = sanitize(args);
    if !is_acceptable_input(&candidate) {
        app.set_status("Income allows up to 4 digits and 2 decimals");
        return Ok(());
    }
    app.set_income_input(&candidate);
    app.submit_income();
    Ok(())
}

fn cmd_theme(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.toggle_theme();
    let label = if app.theme.is_dark() { "dark" } else { "light" };
    app.set_status(format!("Switched to {label} mode"));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rust_decimal_macros::dec;

    use super::*;
    use crate::config::AppConfig;

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("add", "add"), 0);
        assert_eq!(levenshtein("ad", "add"), 1);
        assert_eq!(levenshtein("thme", "theme"), 1);
    }

    #[test]
    fn test_income_command_submits() {
        let mut app = app();
        handle_command("income 2500", &mut app).unwrap();
        assert_eq!(app.income, dec!(2500));
        assert_eq!(app.income_display, "$2,500");
    }

    #[test]
    fn test_income_command_rejects_too_many_digits() {
        let mut app = app();
        handle_command("income 123456", &mut app).unwrap();
        assert_eq!(app.income, dec!(0));
        assert!(app.status_message.contains("4 digits"));
    }

    #[test]
    fn test_income_command_resubmits_same_value() {
        let mut app = app();
        handle_command("i 100", &mut app).unwrap();
        handle_command("i 100", &mut app).unwrap();
        assert_eq!(app.income, dec!(100));
    }

    #[test]
    fn test_add_and_delete_commands() {
        let mut app = app();
        handle_command("add", &mut app).unwrap();
        assert_eq!(app.ledger.len(), 1);
        handle_command("del", &mut app).unwrap();
        assert!(app.ledger.pending_delete().is_some());
        app.confirm_delete();
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_theme_command_flips_flag() {
        let mut app = app();
        assert!(!app.theme.is_dark());
        handle_command("theme", &mut app).unwrap();
        assert!(app.theme.is_dark());
    }

    #[test]
    fn test_unknown_command_suggests() {
        let mut app = app();
        handle_command("thme", &mut app).unwrap();
        assert!(app.status_message.contains(":theme"));
    }

    #[test]
    fn test_quit_command() {
        let mut app = app();
        handle_command("q", &mut app).unwrap();
        assert!(!app.running);
    }
}
