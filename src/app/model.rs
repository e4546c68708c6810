use std::time::{Duration, Instant};

use crate::document::Document;
use crate::ui::viewport::Viewport;

/// Width of the line-number gutter in columns.
pub const LINE_NUMBER_MARGIN: usize = 8;

/// Interaction mode of the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Keys issue navigation commands.
    #[default]
    Idle,
    /// Printable keys build the search pattern.
    Capturing {
        /// Next line after the top line containing the pattern so far
        matching_line: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete viewer state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The loaded document
    pub document: Document,
    /// Terminal size and scroll position
    pub viewport: Viewport,
    /// Current search / filter pattern
    pub pattern: String,
    /// Idle or capturing a new pattern
    pub mode: Mode,
    /// Whether non-matching lines are hidden
    pub filtering: bool,
    /// Whether the line-number gutter is drawn
    pub show_line_numbers: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    toast: Option<Toast>,
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(document: Document, terminal_size: (u16, u16)) -> Self {
        let total_lines = document.len();
        Self {
            document,
            viewport: Viewport::new(terminal_size.0, terminal_size.1, total_lines),
            pattern: String::new(),
            mode: Mode::Idle,
            filtering: false,
            show_line_numbers: true,
            should_quit: false,
            toast: None,
        }
    }

    pub const fn top_line(&self) -> usize {
        self.viewport.top_line()
    }

    pub const fn left_edge(&self) -> usize {
        self.viewport.left_edge()
    }

    pub const fn is_capturing(&self) -> bool {
        matches!(self.mode, Mode::Capturing { .. })
    }

    /// Cached match for the pattern being typed, if capturing.
    pub const fn matching_line(&self) -> Option<usize> {
        match self.mode {
            Mode::Capturing { matching_line } => matching_line,
            Mode::Idle => None,
        }
    }

    /// Whether filtering actually hides lines right now.
    ///
    /// Filtering with an empty pattern shows everything.
    pub fn filter_active(&self) -> bool {
        self.filtering && !self.pattern.is_empty()
    }

    /// Whether a line is drawn under the current filter.
    pub fn is_line_visible(&self, line: &str) -> bool {
        !self.filter_active() || line.contains(self.pattern.as_str())
    }

    /// Indices of lines drawn from the top line downwards, at most `limit`.
    pub fn visible_line_indices(&self, limit: usize) -> impl Iterator<Item = usize> + '_ {
        self.document
            .lines()
            .iter()
            .enumerate()
            .skip(self.top_line())
            .filter(|(_, line)| self.is_line_visible(line))
            .map(|(idx, _)| idx)
            .take(limit)
    }

    /// Gutter width in columns.
    pub const fn margin_width(&self) -> usize {
        if self.show_line_numbers {
            LINE_NUMBER_MARGIN
        } else {
            0
        }
    }

    pub(super) fn refresh_matching_line(&mut self) {
        if let Mode::Capturing { matching_line } = &mut self.mode {
            *matching_line = self
                .document
                .find_next_matching_line(self.viewport.top_line(), &self.pattern);
        }
    }

    pub(crate) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(Document::empty(), (80, 24))
    }
}
