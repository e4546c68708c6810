use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::ToastLevel;

use super::ViewModel;
use super::style;

/// Column where the pattern echo starts.
const PATTERN_COLUMN: usize = 12;

pub fn render_status_bar(
    view: &ViewModel<'_>,
    toast: Option<(&str, ToastLevel)>,
    frame: &mut Frame,
    area: Rect,
) {
    let status = &view.status;
    let mut spans = vec![Span::styled(
        format!("{:<width$}", status.position, width = PATTERN_COLUMN),
        style::position_style(),
    )];

    if status.capturing {
        spans.push(Span::styled(
            format!("/{}", status.pattern),
            style::pattern_style(true),
        ));
    } else if !status.pattern.is_empty() {
        spans.push(Span::styled(
            status.pattern.to_string(),
            style::pattern_style(false),
        ));
    }
    if status.filtering {
        spans.push(Span::raw("  [filter]"));
    }
    if let Some((message, level)) = toast {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.to_string(), style::toast_style(level)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
