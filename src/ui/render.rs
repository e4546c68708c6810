use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::ToastLevel;

use super::view_model::{Highlight, Row};
use super::width::char_width;
use super::{ViewModel, status, style};

/// Render the complete UI.
pub fn render(view: &ViewModel<'_>, toast: Option<(&str, ToastLevel)>, frame: &mut Frame) {
    let area = frame.area();

    // Reserve last line for the status bar.
    let doc_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    let gutter = u16::try_from(view.gutter_width).unwrap_or(u16::MAX);
    let gutter_area = Rect {
        width: gutter.min(doc_area.width),
        ..doc_area
    };
    let text_area = Rect {
        x: doc_area.x + gutter_area.width,
        width: doc_area.width - gutter_area.width,
        ..doc_area
    };

    frame.render_widget(Clear, doc_area);

    if view.show_line_numbers {
        let numbers: Vec<Line> = view
            .rows
            .iter()
            .map(|row| {
                Line::styled(
                    line_number(row, view.gutter_width),
                    style::gutter_style(row.is_match),
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(numbers), gutter_area);
    }

    let content: Vec<Line> = view
        .rows
        .iter()
        .map(|row| Line::from(clip_and_highlight(row.text, &row.highlights, view.left_edge)))
        .collect();
    frame.render_widget(Paragraph::new(content), text_area);

    status::render_status_bar(view, toast, frame, status_area);
}

/// Right-aligned line number followed by one space of padding.
fn line_number(row: &Row<'_>, gutter_width: usize) -> String {
    format!("{:>width$} ", row.number, width = gutter_width.saturating_sub(1))
}

/// Drop the first `left_edge` display columns of `text` and style the
/// highlighted columns of what remains.
///
/// A wide character cut by the left edge is dropped entirely. Zero-width
/// characters keep the style of the segment they follow.
pub fn clip_and_highlight(
    text: &str,
    highlights: &[Highlight],
    left_edge: usize,
) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut current_lit = false;
    let mut column = 0usize;

    for ch in text.chars() {
        let start = column;
        let width = char_width(ch);
        column += width;
        if start < left_edge {
            continue;
        }
        let lit = if width == 0 {
            current_lit
        } else {
            highlights.iter().any(|h| h.contains(start))
        };
        if lit != current_lit && !current.is_empty() {
            spans.push(styled_segment(std::mem::take(&mut current), current_lit));
        }
        current_lit = lit;
        current.push(ch);
    }
    if !current.is_empty() {
        spans.push(styled_segment(current, current_lit));
    }
    spans
}

fn styled_segment(text: String, lit: bool) -> Span<'static> {
    if lit {
        Span::styled(text, style::highlight_style())
    } else {
        Span::raw(text)
    }
}
