use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, Focus, InputMode};
use crate::ui::theme::Palette;

const PREFIX: &str = " $ ";

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Income;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(focused))
        .title(Span::styled(" Monthly Income ", palette.title_style()));

    let value = app.income_input.value();
    let mut spans = vec![Span::styled(PREFIX, palette.dim_style())];
    if value.is_empty() {
        spans.push(Span::styled("Enter income", palette.dim_style()));
    } else {
        spans.push(Span::styled(
            value,
            palette.normal_style().add_modifier(Modifier::BOLD),
        ));
    }

    // Submit is disabled while the field is empty.
    let submit_style = if app.income_input.can_submit() {
        palette.income_style()
    } else {
        palette.dim_style()
    };
    spans.push(Span::styled("   [Enter] Submit", submit_style));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if focused && app.input_mode == InputMode::Normal && !app.show_help {
        let x = area.x + 1 + PREFIX.len() as u16 + value.len() as u16;
        f.set_cursor_position((x, area.y + 1));
    }
}
