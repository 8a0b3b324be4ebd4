use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;

use crate::config::AppConfig;
use crate::income::{parse_submitted, IncomeSource};
use crate::ledger::{EntryState, ExpenseLedger};
use crate::models::{Category, Expense, ExpenseId};
use crate::summary::{summarize, Summary};
use crate::ui::theme::ThemeSwitch;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// Which panel receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Income,
    Expenses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// Expense row field under the cursor while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Title,
    Amount,
    Category,
}

impl Field {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Title,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) focus: Focus,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Income
    pub(crate) income_input: IncomeSource,
    pub(crate) income: Decimal,
    /// Last submitted currency string, e.g. "$2,500".
    pub(crate) income_display: String,

    // Expenses
    pub(crate) ledger: ExpenseLedger,
    /// Latest collection emitted by the ledger.
    expenses: Rc<RefCell<Vec<Expense>>>,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) edit_field: Field,

    pub(crate) theme: ThemeSwitch,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let expenses: Rc<RefCell<Vec<Expense>>> = Rc::new(RefCell::new(Vec::new()));
        let mut ledger = ExpenseLedger::new(config.amount_max_len);
        let sink = Rc::clone(&expenses);
        ledger.subscribe(move |entries| *sink.borrow_mut() = entries.to_vec());

        Self {
            running: true,
            focus: Focus::Income,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            income_input: IncomeSource::new(),
            income: Decimal::ZERO,
            income_display: String::new(),

            ledger,
            expenses,
            expense_index: 0,
            expense_scroll: 0,
            edit_field: Field::Title,

            theme: ThemeSwitch::new(config.dark_mode),

            visible_rows: 10,
        }
    }

    pub(crate) fn summary(&self) -> Summary {
        summarize(self.income, &self.expenses.borrow())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Income => Focus::Expenses,
            Focus::Expenses => Focus::Income,
        };
    }

    pub(crate) fn toggle_theme(&mut self) {
        let dark = self.theme.toggle();
        tracing::debug!(dark, "theme toggled");
    }

    // ── Income ───────────────────────────────────────────────

    pub(crate) fn income_push(&mut self, c: char) {
        self.income_input.push_char(c);
    }

    pub(crate) fn income_pop(&mut self) {
        self.income_input.pop_char();
    }

    pub(crate) fn clear_income_input(&mut self) {
        self.income_input.clear();
    }

    /// Replace the whole income field, e.g. from the command bar.
    pub(crate) fn set_income_input(&mut self, raw: &str) -> bool {
        self.income_input.handle_input(raw)
    }

    pub(crate) fn submit_income(&mut self) {
        let Some(formatted) = self.income_input.submit() else {
            return;
        };
        self.income = parse_submitted(&formatted);
        self.set_status(format!("Monthly income set to {formatted}"));
        self.income_display = formatted;
    }

    // ── Expenses ─────────────────────────────────────────────

    pub(crate) fn selected_id(&self) -> Option<ExpenseId> {
        self.ledger.entries().get(self.expense_index).map(|e| e.id)
    }

    pub(crate) fn selected(&self) -> Option<&Expense> {
        self.ledger.entries().get(self.expense_index)
    }

    pub(crate) fn move_down(&mut self) {
        let page = self.visible_rows.max(1);
        scroll_down(
            &mut self.expense_index,
            &mut self.expense_scroll,
            self.ledger.len(),
            page,
        );
    }

    pub(crate) fn move_up(&mut self) {
        scroll_up(&mut self.expense_index, &mut self.expense_scroll);
    }

    pub(crate) fn goto_top(&mut self) {
        scroll_to_top(&mut self.expense_index, &mut self.expense_scroll);
    }

    pub(crate) fn goto_bottom(&mut self) {
        let page = self.visible_rows.max(1);
        scroll_to_bottom(
            &mut self.expense_index,
            &mut self.expense_scroll,
            self.ledger.len(),
            page,
        );
    }

    /// Append a blank row, select it and start editing its title.
    pub(crate) fn add_expense(&mut self) {
        self.ledger.add();
        self.focus = Focus::Expenses;
        self.expense_index = self.ledger.len() - 1;
        let page = self.visible_rows.max(1);
        self.expense_scroll = self.expense_index.saturating_sub(page - 1);
        self.edit_field = Field::Title;
        self.input_mode = InputMode::Editing;
    }

    pub(crate) fn begin_edit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.ledger.state_of(id) == Some(EntryState::PendingDelete) {
            self.set_status("Confirm (y) or cancel (n) the delete first");
            return;
        }
        self.edit_field = Field::Title;
        self.input_mode = InputMode::Editing;
    }

    pub(crate) fn end_edit(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn next_field(&mut self) {
        self.edit_field = self.edit_field.next();
    }

    pub(crate) fn edit_push(&mut self, c: char) {
        let Some(entry) = self.selected() else {
            return;
        };
        let id = entry.id;
        match self.edit_field {
            Field::Title => {
                let title = format!("{}{c}", entry.title);
                self.ledger.set_title(id, &title);
            }
            Field::Amount => {
                let amount = format!("{}{c}", entry.amount);
                self.ledger.set_amount(id, &amount);
            }
            Field::Category => match c {
                '1'..='4' => {
                    let idx = c as usize - '1' as usize;
                    let category = Category::all().get(idx).copied();
                    self.ledger.set_category(id, category);
                }
                _ => {}
            },
        }
    }

    pub(crate) fn edit_pop(&mut self) {
        let Some(entry) = self.selected() else {
            return;
        };
        let id = entry.id;
        match self.edit_field {
            Field::Title => {
                let mut title = entry.title.clone();
                title.pop();
                self.ledger.set_title(id, &title);
            }
            Field::Amount => {
                let mut amount = entry.amount.clone();
                amount.pop();
                self.ledger.set_amount(id, &amount);
            }
            Field::Category => {
                self.ledger.set_category(id, None);
            }
        }
    }

    pub(crate) fn cycle_category(&mut self, forward: bool) {
        let Some(entry) = self.selected() else {
            return;
        };
        let id = entry.id;
        let next = Category::cycle(entry.category, forward);
        self.ledger.set_category(id, Some(next));
    }

    pub(crate) fn request_delete(&mut self) {
        let Some(id) = self.selected_id() else {
            self.set_status("No expense selected");
            return;
        };
        if self.ledger.request_delete(id) {
            self.input_mode = InputMode::Normal;
            self.set_status("Delete this expense? y = confirm, n = cancel");
        }
    }

    pub(crate) fn confirm_delete(&mut self) {
        let Some(removed) = self.ledger.confirm_delete() else {
            return;
        };
        if self.expense_index >= self.ledger.len() {
            self.expense_index = self.ledger.len().saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
        let name = if removed.title.is_empty() {
            "expense".to_string()
        } else {
            format!("'{}'", removed.title)
        };
        self.set_status(format!("Deleted {name}"));
    }

    pub(crate) fn cancel_delete(&mut self) {
        if self.ledger.cancel_delete().is_some() {
            self.set_status("Delete cancelled");
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
