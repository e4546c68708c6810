//! Viewport management for scrolling.
//!
//! The [`Viewport`] struct tracks the terminal size and the scroll
//! position (top line and left edge) over a document. Movement methods
//! are unchecked; [`Viewport::clamp`] restores the invariants and runs
//! after every update.

/// Manages the visible portion of a document.
///
/// The viewport tracks:
/// - Terminal dimensions (width, height), where the last row is the status bar
/// - First visible line and first visible column
/// - Total document length
///
/// # Example
///
/// ```
/// use fv::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 24, 100);
/// assert_eq!(vp.page_rows(), 23);
///
/// vp.page_down();
/// vp.clamp();
/// assert_eq!(vp.top_line(), 23);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    top_line: usize,
    left_edge: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal width in columns
    /// * `height` - Terminal height in rows, including the status row
    /// * `total_lines` - Total lines in the document
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            top_line: 0,
            left_edge: 0,
            total_lines,
        }
    }

    /// Get the first visible line.
    pub const fn top_line(&self) -> usize {
        self.top_line
    }

    /// Get the first visible column.
    pub const fn left_edge(&self) -> usize {
        self.left_edge
    }

    /// Get the viewport width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Rows available for document text (everything but the status row).
    ///
    /// This is also the size of a page jump.
    pub const fn page_rows(&self) -> usize {
        self.height.saturating_sub(1) as usize
    }

    pub const fn set_top_line(&mut self, line: usize) {
        self.top_line = line;
    }

    pub const fn set_left_edge(&mut self, column: usize) {
        self.left_edge = column;
    }

    /// Scroll up by n lines.
    pub const fn scroll_up(&mut self, n: usize) {
        self.top_line = self.top_line.saturating_sub(n);
    }

    /// Scroll down by n lines.
    pub const fn scroll_down(&mut self, n: usize) {
        self.top_line = self.top_line.saturating_add(n);
    }

    pub const fn scroll_left(&mut self, n: usize) {
        self.left_edge = self.left_edge.saturating_sub(n);
    }

    pub const fn scroll_right(&mut self, n: usize) {
        self.left_edge = self.left_edge.saturating_add(n);
    }

    /// Scroll up one page.
    pub const fn page_up(&mut self) {
        self.scroll_up(self.page_rows());
    }

    /// Scroll down one page.
    pub const fn page_down(&mut self) {
        self.scroll_down(self.page_rows());
    }

    /// Go to the beginning of the document.
    pub const fn go_to_top(&mut self) {
        self.top_line = 0;
    }

    /// Go to the end of the document, leaving the last page filled.
    pub const fn go_to_bottom(&mut self) {
        self.top_line = self.total_lines.saturating_sub(self.page_rows());
    }

    /// Resize the viewport.
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Pull the position back inside the document and the terminal width.
    ///
    /// `top_line` ends up in `[0, total_lines - 1]` (0 for an empty
    /// document) and `left_edge` in `[0, width - 1]`.
    pub fn clamp(&mut self) {
        self.top_line = self.top_line.min(self.total_lines.saturating_sub(1));
        self.left_edge = self
            .left_edge
            .min(usize::from(self.width.saturating_sub(1)));
    }
}
