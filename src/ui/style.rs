//! Colors for the viewer.
//!
//! Uses ANSI colors that adapt to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::app::ToastLevel;

/// Line number style; matching lines get the brighter variant.
pub fn gutter_style(is_match: bool) -> Style {
    if is_match {
        Style::default().fg(Color::LightCyan)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM)
    }
}

/// Occurrences of the pattern inside a line.
pub fn highlight_style() -> Style {
    Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
}

/// The `top/total` indicator.
pub fn position_style() -> Style {
    Style::default().fg(Color::LightGreen)
}

/// The pattern echo in the status row.
pub fn pattern_style(capturing: bool) -> Style {
    let style = Style::default().fg(Color::Yellow);
    if capturing {
        style
    } else {
        style.add_modifier(Modifier::DIM)
    }
}

pub fn toast_style(level: ToastLevel) -> Style {
    match level {
        ToastLevel::Warning => Style::default().bg(Color::Yellow).fg(Color::Black),
        ToastLevel::Error => Style::default().bg(Color::Red).fg(Color::White),
    }
}
