use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, Field, Focus, InputMode};
use super::commands;
use super::panels;
use super::theme::Palette;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app, &palette);
    render_main(f, chunks[1], app, &palette);
    render_status_bar(f, chunks[2], app, &palette);
    render_command_bar(f, chunks[3], app, &palette);

    if app.show_help {
        render_help_overlay(f, f.area(), &palette);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = " budgetpie ";
    let toggle = format!(" Ctrl-t: {} ", app.theme.label());
    let pad = (area.width as usize).saturating_sub(title.len() + toggle.len());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(title, palette.header_style()),
        Span::styled(" ".repeat(pad), palette.header_style()),
        Span::styled(toggle, Style::default().fg(palette.text_dim).bg(palette.header_bg)),
    ]));
    f.render_widget(header, area);
}

fn render_main(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Income input
            Constraint::Min(4),    // Expense list
        ])
        .split(columns[0]);

    panels::income::render(f, left[0], app, palette);
    panels::expenses::render(f, left[1], app, palette);

    let summary = app.summary();
    if app.income > rust_decimal::Decimal::ZERO {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Income / expenses / remaining
                Constraint::Min(6),    // Pie chart
            ])
            .split(columns[1]);
        panels::summary::render(f, right[0], &summary, palette);
        panels::chart::render(f, right[1], &summary, palette);
    } else {
        panels::summary::render_placeholder(f, columns[1], palette);
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => palette.accent,
        InputMode::Command => palette.green,
        InputMode::Editing => palette.yellow,
    };
    let mode_style = Style::default()
        .fg(palette.header_bg)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let focus = match app.focus {
        Focus::Income => "Income",
        Focus::Expenses => "Expenses",
    };
    let info = format!(" {focus} | {} expenses", app.ledger.len());

    let right = match (app.focus, app.input_mode) {
        (_, InputMode::Command) => " Enter run | Esc cancel ",
        (_, InputMode::Editing) => " Tab next field | ←/→ category | Esc done ",
        (_, InputMode::Normal) if app.ledger.pending_delete().is_some() => {
            " y confirm delete | n cancel "
        }
        (Focus::Income, InputMode::Normal) => " type amount | Enter submit | Tab expenses ",
        (Focus::Expenses, InputMode::Normal) => " a add | e edit | d delete | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, palette.status_bar_style()),
        Span::styled(" ".repeat(pad), palette.status_bar_style()),
        Span::styled(right, palette.status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(palette.accent)),
                Span::styled(&app.command_input, palette.command_bar_style()),
            ]),
            Some(1 + app.command_input.len() as u16),
        ),
        InputMode::Editing => {
            let field = match app.edit_field {
                Field::Title => "title",
                Field::Amount => "amount",
                Field::Category => "category (1-4, ←/→)",
            };
            (
                Line::from(vec![
                    Span::styled(format!("edit {field}> "), Style::default().fg(palette.green)),
                    Span::styled("Tab next field, Esc done", palette.dim_style()),
                ]),
                None,
            )
        }
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, Tab to switch panels, ? for help",
                    palette.dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    palette.command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(palette.command_bg));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect, palette: &Palette) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(palette.yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, palette.normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " budgetpie Help ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Income"),
        row("  0-9 .           Type amount            Enter      Submit"),
        row("  Backspace       Delete last digit      Tab        Go to expenses"),
        Line::from(""),
        section(" Expenses"),
        row("  j/k or Up/Down  Move cursor            g/G        Top/Bottom"),
        row("  a               Add expense            e/Enter    Edit selected"),
        row("  d               Delete (asks first)    y/n        Confirm/Cancel"),
        row("  Tab (editing)   Next field             ←/→        Cycle category"),
        Line::from(""),
        section(" Anywhere"),
        row("  Ctrl-t          Toggle dark mode       Ctrl-q     Quit"),
        row("  :               Command mode           ?          This help"),
        Line::from(""),
        section(" Commands"),
    ];

    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<14} {desc}"),
            palette.normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        palette.dim_style(),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.header_bg)),
    );
    f.render_widget(help, popup_area);
}
