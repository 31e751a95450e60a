//! Theme system for the surveyscope TUI.
//!
//! Provides dark and light color palettes, loaded from UiConfig.theme.

use ratatui::style::{Color, Modifier, Style};

/// Complete color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,

    // Status colors
    pub error_fg: Color,
    pub success_fg: Color,
    pub muted_fg: Color,

    // UI chrome
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub border_color: Color,
    pub selection_bg: Color,

    /// Cycled through chart slices and bars.
    pub series: Vec<Color>,
}

impl Theme {
    /// Create the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            bg: Color::Rgb(30, 30, 46),
            fg: Color::Rgb(205, 214, 244),
            accent: Color::Rgb(137, 180, 250),

            error_fg: Color::Rgb(243, 139, 168),
            success_fg: Color::Rgb(166, 227, 161),
            muted_fg: Color::Rgb(127, 132, 156),

            header_bg: Color::Rgb(24, 24, 37),
            header_fg: Color::Rgb(205, 214, 244),
            status_bar_bg: Color::Rgb(24, 24, 37),
            status_bar_fg: Color::Rgb(166, 173, 200),
            border_color: Color::Rgb(69, 71, 90),
            selection_bg: Color::Rgb(69, 71, 90),

            series: vec![
                Color::Rgb(137, 180, 250),
                Color::Rgb(166, 227, 161),
                Color::Rgb(249, 226, 175),
                Color::Rgb(243, 139, 168),
                Color::Rgb(180, 190, 254),
                Color::Rgb(148, 226, 213),
                Color::Rgb(250, 179, 135),
                Color::Rgb(203, 166, 247),
            ],
        }
    }

    /// Create the light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            bg: Color::Rgb(239, 241, 245),
            fg: Color::Rgb(76, 79, 105),
            accent: Color::Rgb(30, 102, 245),

            error_fg: Color::Rgb(210, 15, 57),
            success_fg: Color::Rgb(64, 160, 43),
            muted_fg: Color::Rgb(140, 143, 161),

            header_bg: Color::Rgb(220, 224, 232),
            header_fg: Color::Rgb(76, 79, 105),
            status_bar_bg: Color::Rgb(220, 224, 232),
            status_bar_fg: Color::Rgb(92, 95, 119),
            border_color: Color::Rgb(172, 176, 190),
            selection_bg: Color::Rgb(188, 192, 204),

            series: vec![
                Color::Rgb(30, 102, 245),
                Color::Rgb(64, 160, 43),
                Color::Rgb(223, 142, 29),
                Color::Rgb(210, 15, 57),
                Color::Rgb(114, 135, 253),
                Color::Rgb(23, 146, 153),
                Color::Rgb(254, 100, 11),
                Color::Rgb(136, 57, 239),
            ],
        }
    }

    /// Load a theme by name from config. Falls back to dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().fg(self.status_bar_fg).bg(self.status_bar_bg)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border_color)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted_fg)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg).add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success_fg)
    }

    pub fn selection_style(&self) -> Style {
        Style::default().bg(self.selection_bg).add_modifier(Modifier::BOLD)
    }

    /// Color for the n-th chart series, cycling past the palette end.
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }
}
