use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::money::format_amount;
use crate::summary::Summary;
use crate::ui::theme::{hex_color, Palette};

/// Breathing room so the disc does not touch the canvas edge.
const MARGIN: f64 = 1.05;

pub(crate) fn render(f: &mut Frame, area: Rect, summary: &Summary, palette: &Palette) {
    let caption = format!(" {}% Of Income Spent ", summary.percent_spent_label());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(false))
        .title(Span::styled(" Your Spending ", palette.title_style()))
        .title_bottom(Line::from(Span::styled(caption, palette.income_style())).centered());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let legend_height = summary.chart.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(legend_height)])
        .split(inner);

    render_pie(f, chunks[0], summary, palette);
    render_legend(f, chunks[1], summary, palette);
}

fn render_pie(f: &mut Frame, area: Rect, summary: &Summary, palette: &Palette) {
    let values: Vec<f64> = summary
        .chart
        .iter()
        .map(|s| s.value.to_f64().unwrap_or(0.0))
        .collect();

    if values.iter().all(|v| *v <= 0.0) {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing to chart yet",
            palette.dim_style(),
        )))
        .centered();
        f.render_widget(msg, area);
        return;
    }

    let (x_half, y_half) = canvas_half_extents(area.width, area.height);
    let cols = area.width as usize * 2;
    let rows = area.height as usize * 4;
    let layers: Vec<(Vec<(f64, f64)>, Color)> =
        pie_points(&values, x_half, y_half, cols, rows)
            .into_iter()
            .zip(summary.chart.iter().map(|s| hex_color(s.color)))
            .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(palette.background)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(|ctx| {
            for (coords, color) in &layers {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: *color,
                });
            }
        });
    f.render_widget(canvas, area);
}

fn render_legend(f: &mut Frame, area: Rect, summary: &Summary, palette: &Palette) {
    let lines: Vec<Line> = summary
        .chart
        .iter()
        .map(|slice| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(hex_color(slice.color))),
                Span::styled(format!("{:<18}", slice.name), palette.normal_style()),
                Span::styled(format_amount(slice.value), palette.dim_style()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).centered(), area);
}

/// Half-width and half-height of the canvas in chart units, sized so a unit
/// circle stays round on terminal cells (about twice as tall as wide).
pub(crate) fn canvas_half_extents(width: u16, height: u16) -> (f64, f64) {
    if width == 0 || height == 0 {
        return (MARGIN, MARGIN);
    }
    let ratio = f64::from(width) / (2.0 * f64::from(height));
    if ratio >= 1.0 {
        (ratio * MARGIN, MARGIN)
    } else {
        (MARGIN, MARGIN / ratio)
    }
}

/// Position of `(x, y)` measured clockwise from twelve o'clock, in turns `[0, 1)`.
fn turn_of(x: f64, y: f64) -> f64 {
    let turn = x.atan2(y) / std::f64::consts::TAU;
    if turn < 0.0 {
        turn + 1.0
    } else {
        turn
    }
}

/// Sample a `cols` x `rows` grid over the canvas and assign every point inside
/// the unit circle to the slice whose sector contains it. Slices are laid out
/// clockwise from twelve o'clock in input order; non-positive values get no area.
pub(crate) fn pie_points(
    values: &[f64],
    x_half: f64,
    y_half: f64,
    cols: usize,
    rows: usize,
) -> Vec<Vec<(f64, f64)>> {
    let mut points = vec![Vec::new(); values.len()];
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 || cols == 0 || rows == 0 {
        return points;
    }

    let mut acc = 0.0;
    let bounds: Vec<f64> = values
        .iter()
        .map(|v| {
            acc += v.max(0.0) / total;
            acc
        })
        .collect();
    let last = values.len() - 1;

    let dx = 2.0 * x_half / cols as f64;
    let dy = 2.0 * y_half / rows as f64;
    for row in 0..rows {
        let y = -y_half + (row as f64 + 0.5) * dy;
        for col in 0..cols {
            let x = -x_half + (col as f64 + 0.5) * dx;
            if x * x + y * y > 1.0 {
                continue;
            }
            let turn = turn_of(x, y);
            let idx = bounds.iter().position(|b| turn < *b).unwrap_or(last);
            points[idx].push((x, y));
        }
    }
    points
}
