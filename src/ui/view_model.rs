//! Renderer-facing snapshot of the viewer.
//!
//! A [`ViewModel`] borrows the model for one frame and lists exactly what
//! should be drawn: the visible rows with their match highlights, the
//! status fields and the horizontal scroll state. Nothing here touches the
//! terminal, so it can be tested without a backend.

use crate::app::Model;

use super::width::display_width;

/// A highlighted occurrence of the pattern, in display columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    /// First highlighted column, counted from the start of the line
    pub column: usize,
    /// Number of highlighted columns
    pub len: usize,
}

impl Highlight {
    /// Whether `column` falls inside the highlight.
    pub const fn contains(&self, column: usize) -> bool {
        column >= self.column && column < self.column + self.len
    }
}

/// One visible document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// 1-based line number
    pub number: usize,
    /// The full line; the renderer clips it
    pub text: &'a str,
    pub highlights: Vec<Highlight>,
    /// Whether the line contains the current pattern
    pub is_match: bool,
}

/// Contents of the status row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status<'a> {
    /// `"<top line>/<line count>"`, 1-based, or `"0/0"` for an empty document
    pub position: String,
    /// Current pattern, possibly still being typed
    pub pattern: &'a str,
    /// Whether the pattern is being typed
    pub capturing: bool,
    /// Whether filtering is switched on
    pub filtering: bool,
}

/// Everything one frame draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel<'a> {
    /// Visible lines, top to bottom
    pub rows: Vec<Row<'a>>,
    pub status: Status<'a>,
    /// Display columns hidden on the left
    pub left_edge: usize,
    pub show_line_numbers: bool,
    /// Gutter columns; 0 when line numbers are hidden
    pub gutter_width: usize,
}

impl<'a> ViewModel<'a> {
    /// Build the snapshot for the current model state.
    pub fn from_model(model: &'a Model) -> Self {
        let pattern = model.pattern.as_str();
        let rows = model
            .visible_line_indices(model.viewport.page_rows())
            .filter_map(|idx| model.document.line(idx).map(|text| (idx, text)))
            .map(|(idx, text)| {
                let highlights = highlights(text, pattern);
                Row {
                    number: idx + 1,
                    text,
                    is_match: !highlights.is_empty(),
                    highlights,
                }
            })
            .collect();

        let position = if model.document.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", model.top_line() + 1, model.document.len())
        };

        Self {
            rows,
            status: Status {
                position,
                pattern,
                capturing: model.is_capturing(),
                filtering: model.filtering,
            },
            left_edge: model.left_edge(),
            show_line_numbers: model.show_line_numbers,
            gutter_width: model.margin_width(),
        }
    }
}

fn highlights(text: &str, pattern: &str) -> Vec<Highlight> {
    crate::search::match_spans(text, pattern)
        .into_iter()
        .map(|range| Highlight {
            column: display_width(&text[..range.start]),
            len: display_width(&text[range]),
        })
        .collect()
}
