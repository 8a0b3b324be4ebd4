/// Fixed set of expense classifications used for grouping and chart colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Entertainment,
    Bills,
    Miscellaneous,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Case-insensitive lookup. Unknown names map to `None` (category unset).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "entertainment" | "fun" => Some(Self::Entertainment),
            "bills" | "bill" => Some(Self::Bills),
            "miscellaneous" | "misc" => Some(Self::Miscellaneous),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Entertainment,
            Self::Bills,
            Self::Miscellaneous,
        ]
    }

    /// Chart color as a `#rrggbb` hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#ff8000",
            Self::Entertainment => "#0093ff",
            Self::Bills => "#ff0000",
            Self::Miscellaneous => "#ffd500",
        }
    }

    /// Step through the dropdown order, wrapping at either end.
    /// An unset category starts at the first (or last) entry.
    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        let all = Self::all();
        let Some(cur) = current else {
            return if forward { all[0] } else { all[all.len() - 1] };
        };
        let idx = all.iter().position(|c| *c == cur).unwrap_or(0);
        let next = if forward {
            (idx + 1) % all.len()
        } else if idx == 0 {
            all.len() - 1
        } else {
            idx - 1
        };
        all[next]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
