use std::cell::Cell;
use std::rc::Rc;

use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) header_bg: Color,
    pub(crate) header_fg: Color,
    pub(crate) background: Color,
    pub(crate) accent: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
    pub(crate) surface: Color,
    pub(crate) text: Color,
    pub(crate) text_dim: Color,
    pub(crate) overlay: Color,
    pub(crate) command_bg: Color,
}

impl Palette {
    pub(crate) const DARK: Palette = Palette {
        header_bg: Color::Rgb(30, 30, 46),
        header_fg: Color::Rgb(205, 214, 244),
        background: Color::Rgb(24, 24, 37),
        accent: Color::Rgb(137, 180, 250),
        green: Color::Rgb(166, 227, 161),
        red: Color::Rgb(243, 139, 168),
        yellow: Color::Rgb(249, 226, 175),
        surface: Color::Rgb(49, 50, 68),
        text: Color::Rgb(205, 214, 244),
        text_dim: Color::Rgb(127, 132, 156),
        overlay: Color::Rgb(69, 71, 90),
        command_bg: Color::Rgb(17, 17, 27),
    };

    pub(crate) const LIGHT: Palette = Palette {
        header_bg: Color::Rgb(220, 214, 240),
        header_fg: Color::Rgb(76, 79, 105),
        background: Color::Rgb(239, 241, 245),
        accent: Color::Rgb(30, 102, 245),
        green: Color::Rgb(22, 163, 74),
        red: Color::Rgb(210, 15, 57),
        yellow: Color::Rgb(223, 142, 29),
        surface: Color::Rgb(230, 233, 239),
        text: Color::Rgb(76, 79, 105),
        text_dim: Color::Rgb(140, 143, 161),
        overlay: Color::Rgb(172, 176, 190),
        command_bg: Color::Rgb(220, 224, 232),
    };

    pub(crate) fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text_dim)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn selected_style(&self) -> Style {
        Style::default().fg(self.header_bg).bg(self.accent)
    }

    pub(crate) fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub(crate) fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub(crate) fn income_style(&self) -> Style {
        Style::default().fg(self.green).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn alt_row_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub(crate) fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.overlay)
        }
    }

    pub(crate) fn command_bar_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.command_bg)
    }

    pub(crate) fn status_bar_style(&self) -> Style {
        Style::default().fg(self.text_dim).bg(self.surface)
    }
}

/// Process-wide dark mode flag. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeSwitch {
    dark: Rc<Cell<bool>>,
}

impl ThemeSwitch {
    pub(crate) fn new(dark: bool) -> Self {
        Self {
            dark: Rc::new(Cell::new(dark)),
        }
    }

    pub(crate) fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub(crate) fn set(&self, dark: bool) {
        self.dark.set(dark);
    }

    /// Flip the flag and return the new value.
    pub(crate) fn toggle(&self) -> bool {
        let dark = !self.is_dark();
        self.set(dark);
        dark
    }

    pub(crate) fn palette(&self) -> Palette {
        if self.is_dark() {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }

    /// Label for the toggle control: names the mode it switches to.
    pub(crate) fn label(&self) -> &'static str {
        if self.is_dark() {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

/// Parse a `#rrggbb` chart color, falling back to the terminal default.
pub(crate) fn hex_color(hex: &str) -> Color {
    hex.parse::<Color>().unwrap_or(Color::Reset)
}
