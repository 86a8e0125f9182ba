use ratatui::style::{Color, Modifier, Style};

use crate::game::Mark;

// Teal for X and headings, coral for O and the draw banner, amber for wins.
pub const PRIMARY: Color = Color::Cyan;
pub const ACCENT: Color = Color::LightRed;
pub const SECONDARY: Color = Color::Yellow;

pub fn mark(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => PRIMARY,
        Mark::O => ACCENT,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(SECONDARY)
        .add_modifier(Modifier::BOLD)
}

pub fn hint() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn grid() -> Style {
    Style::default().fg(Color::Gray)
}
