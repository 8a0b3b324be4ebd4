use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::money::{format_amount, format_grouped};
use crate::summary::Summary;
use crate::ui::theme::Palette;

pub(crate) fn render(f: &mut Frame, area: Rect, summary: &Summary, palette: &Palette) {
    let heading = |text: &'static str| Line::from(Span::styled(text, palette.title_style()));
    let figure = |text: String, color: Color| {
        Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    };

    let remaining_color = if summary.is_overspent() {
        palette.red
    } else {
        palette.green
    };

    let text = Paragraph::new(vec![
        heading("Your Monthly Income"),
        figure(format!("${}", format_grouped(summary.income, 0)), palette.accent),
        heading("Your Monthly Expenses"),
        figure(format!("-{}", format_amount(summary.total)), palette.red),
        heading("Remaining Income"),
        figure(format_amount(summary.remaining), remaining_color),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style(false))
            .title(Span::styled(" Summary ", palette.title_style())),
    );

    f.render_widget(text, area);
}

pub(crate) fn render_placeholder(f: &mut Frame, area: Rect, palette: &Palette) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Enter your monthly income to get started!",
            palette.normal_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Type it in the income box and press Enter.",
            palette.dim_style(),
        )),
    ])
    .centered()
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style(false))
            .title(Span::styled(" Your Spending ", palette.title_style())),
    );
    f.render_widget(text, area);
}
