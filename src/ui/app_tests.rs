#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn app() -> App {
    App::new(&AppConfig::default())
}

fn app_with_income(raw: &str) -> App {
    let mut app = app();
    app.set_income_input(raw);
    app.submit_income();
    app
}

/// Add a row, fill it in and leave edit mode.
fn add(app: &mut App, title: &str, amount: &str, category: Option<Category>) -> ExpenseId {
    app.add_expense();
    let id = app.selected_id().unwrap();
    app.ledger.set_title(id, title);
    app.ledger.set_amount(id, amount);
    app.ledger.set_category(id, category);
    app.end_edit();
    id
}

#[test]
fn test_new_app_defaults() {
    let app = app();
    assert!(app.running);
    assert_eq!(app.focus, Focus::Income);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.income, dec!(0));
    assert!(app.ledger.is_empty());
    assert!(!app.theme.is_dark());
}

#[test]
fn test_dark_mode_from_config() {
    let config = AppConfig {
        dark_mode: true,
        ..AppConfig::default()
    };
    let app = App::new(&config);
    assert!(app.theme.is_dark());
}

#[test]
fn test_submit_income_updates_figures() {
    let app = app_with_income("1234.5");
    assert_eq!(app.income, dec!(1234.5));
    assert_eq!(app.income_display, "$1,234.5");
    assert!(app.status_message.contains("$1,234.5"));
}

#[test]
fn test_submit_empty_income_is_ignored() {
    let mut app = app_with_income("800");
    app.clear_income_input();
    app.submit_income();
    assert_eq!(app.income, dec!(800));
    assert_eq!(app.income_display, "$800");
}

#[test]
fn test_add_expense_selects_and_edits_new_row() {
    let mut app = app();
    app.add_expense();
    app.end_edit();
    app.add_expense();
    assert_eq!(app.focus, Focus::Expenses);
    assert_eq!(app.input_mode, InputMode::Editing);
    assert_eq!(app.edit_field, Field::Title);
    assert_eq!(app.expense_index, 1);
}

#[test]
fn test_edit_push_and_pop_per_field() {
    let mut app = app();
    app.add_expense();
    app.edit_push('G');
    app.edit_push('y');
    app.edit_push('m');
    app.edit_pop();
    app.next_field();
    app.edit_push('4');
    app.edit_push('x');
    app.edit_push('0');
    app.next_field();
    app.edit_push('3');

    let e = app.selected().unwrap();
    assert_eq!(e.title, "Gy");
    assert_eq!(e.amount, "40");
    assert_eq!(e.category, Some(Category::Bills));

    app.edit_pop();
    assert_eq!(app.selected().unwrap().category, None);
    app.next_field();
    assert_eq!(app.edit_field, Field::Title);
}

#[test]
fn test_amount_respects_length_cap() {
    let mut app = app();
    app.add_expense();
    app.next_field();
    for c in "1234567".chars() {
        app.edit_push(c);
    }
    assert_eq!(app.selected().unwrap().amount, "12345");
}

#[test]
fn test_configured_amount_cap() {
    let config = AppConfig {
        amount_max_len: 7,
        ..AppConfig::default()
    };
    let mut app = App::new(&config);
    app.add_expense();
    app.next_field();
    for c in "123456789".chars() {
        app.edit_push(c);
    }
    assert_eq!(app.selected().unwrap().amount, "1234567");
}

#[test]
fn test_cycle_category_wraps() {
    let mut app = app();
    app.add_expense();
    app.cycle_category(true);
    assert_eq!(app.selected().unwrap().category, Some(Category::Food));
    app.cycle_category(false);
    assert_eq!(
        app.selected().unwrap().category,
        Some(Category::Miscellaneous)
    );
}

#[test]
fn test_summary_follows_ledger_emissions() {
    let mut app = app_with_income("2500");
    add(&mut app, "Groceries", "500", Some(Category::Food));
    let rent = add(&mut app, "Rent", "300", Some(Category::Bills));

    let summary = app.summary();
    assert_eq!(summary.total, dec!(800));
    assert_eq!(summary.remaining, dec!(1700));
    assert_eq!(summary.percent_spent_label(), "32.00");

    app.ledger.set_amount(rent, "1000");
    assert_eq!(app.summary().total, dec!(1500));
}

#[test]
fn test_delete_requires_confirmation() {
    let mut app = app_with_income("1000");
    add(&mut app, "Gym", "50", Some(Category::Miscellaneous));

    app.request_delete();
    assert!(app.ledger.pending_delete().is_some());
    assert_eq!(app.summary().total, dec!(50));

    app.cancel_delete();
    assert!(app.ledger.pending_delete().is_none());
    assert_eq!(app.ledger.len(), 1);

    app.request_delete();
    app.confirm_delete();
    assert!(app.ledger.is_empty());
    assert_eq!(app.summary().total, dec!(0));
    assert_eq!(app.status_message, "Deleted 'Gym'");
}

#[test]
fn test_new_delete_request_supersedes_previous() {
    let mut app = app();
    let first = add(&mut app, "A", "1", None);
    let second = add(&mut app, "B", "2", None);

    app.expense_index = 0;
    app.request_delete();
    assert_eq!(app.ledger.pending_delete(), Some(first));

    app.expense_index = 1;
    app.request_delete();
    assert_eq!(app.ledger.pending_delete(), Some(second));
    assert_eq!(app.ledger.state_of(first), Some(EntryState::Editing));

    app.confirm_delete();
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.ledger.entries()[0].id, first);
    assert_eq!(app.expense_index, 0);
}

#[test]
fn test_pending_row_blocks_editing() {
    let mut app = app();
    add(&mut app, "Gym", "50", None);
    app.request_delete();
    app.begin_edit();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.status_message.contains("first"));
}

#[test]
fn test_request_delete_on_empty_ledger() {
    let mut app = app();
    app.request_delete();
    assert!(app.ledger.pending_delete().is_none());
    assert_eq!(app.status_message, "No expense selected");
}

#[test]
fn test_toggle_theme_flips_palette() {
    let mut app = app();
    let light = app.theme.palette().background;
    app.toggle_theme();
    assert!(app.theme.is_dark());
    assert_ne!(app.theme.palette().background, light);
}
