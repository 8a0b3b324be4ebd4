use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ledger::EntryState;
use crate::models::Expense;
use crate::ui::app::{App, Field, Focus, InputMode};
use crate::ui::theme::Palette;
use crate::ui::util::truncate;

const TITLE_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 15;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Expenses;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(focused))
        .title(Span::styled(
            format!(" Expenses ({}) ", app.ledger.len()),
            palette.title_style(),
        ));

    if app.ledger.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No expenses yet. Press a to add one.",
                palette.dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .ledger
        .entries()
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, expense)| {
            let selected = focused && i == app.expense_index;
            ListItem::new(row(app, expense, i, selected, palette))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn row<'a>(
    app: &App,
    expense: &'a Expense,
    index: usize,
    selected: bool,
    palette: &Palette,
) -> Line<'a> {
    if app.ledger.state_of(expense.id) == Some(EntryState::PendingDelete) {
        let what = if expense.title.is_empty() {
            "this expense".to_string()
        } else {
            format!("'{}'", truncate(&expense.title, TITLE_WIDTH))
        };
        return Line::from(vec![
            Span::styled(
                format!(" Delete {what}? "),
                Style::default()
                    .fg(palette.yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("[y] confirm", Style::default().fg(palette.green)),
            Span::raw("  "),
            Span::styled("[n] cancel", Style::default().fg(palette.red)),
        ]);
    }

    let base = if selected {
        palette.selected_style()
    } else if index % 2 == 0 {
        palette.alt_row_style()
    } else {
        palette.normal_style()
    };
    let editing = selected && app.input_mode == InputMode::Editing;
    let field_style = |field: Field, empty: bool| {
        if editing && app.edit_field == field {
            Style::default()
                .fg(palette.header_bg)
                .bg(palette.yellow)
                .add_modifier(Modifier::BOLD)
        } else if empty && !selected {
            base.fg(palette.text_dim)
        } else {
            base
        }
    };

    let title = if expense.title.is_empty() {
        "Expense name".to_string()
    } else {
        truncate(&expense.title, TITLE_WIDTH)
    };
    let amount = if expense.amount.is_empty() {
        "0.00"
    } else {
        expense.amount.as_str()
    };
    let category = expense
        .category
        .map(|c| c.as_str())
        .unwrap_or("Select category");

    Line::from(vec![
        Span::styled(" ", base),
        Span::styled(
            format!("{title:<TITLE_WIDTH$}"),
            field_style(Field::Title, expense.title.is_empty()),
        ),
        Span::styled(" $", base),
        Span::styled(
            format!("{amount:>7}"),
            field_style(Field::Amount, expense.amount.is_empty()),
        ),
        Span::styled(" ", base),
        Span::styled(
            format!("{category:<CATEGORY_WIDTH$}"),
            field_style(Field::Category, expense.category.is_none()),
        ),
    ])
}
