use crate::app::Model;
use crate::app::model::{Mode, ToastLevel};
use crate::app::paging;
use crate::ui::width::display_width;

/// All possible commands the viewer understands.
///
/// Key mapping in `input` produces these; [`update`] applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Pattern capture
    /// Start typing a new pattern
    StartCapture,
    /// Append a character to the pattern being typed
    CaptureInput(char),
    /// Remove the last character of the pattern being typed
    BackspaceCapture,
    /// Accept the pattern and jump to its match
    EndCapture,
    /// Abandon the pattern being typed
    CancelCapture,

    // Matches
    /// Jump to the previous matching line, wrapping at the top
    PreviousMatch,
    /// Jump to the next matching line, wrapping at the bottom
    NextMatch,

    // Navigation
    /// Scroll up one line
    PreviousLine,
    /// Scroll down one line
    NextLine,
    /// Scroll left one column
    PreviousColumn,
    /// Scroll right one column
    NextColumn,
    /// Go to beginning of document
    StartOfDocument,
    /// Go to end of document
    EndOfDocument,
    /// Scroll up one page
    PreviousPage,
    /// Scroll down one page
    NextPage,
    /// Scroll up one page of matching lines
    PreviousFilteredPage,
    /// Scroll down one page of matching lines
    NextFilteredPage,
    /// Scroll back to the first column
    LeftmostColumn,
    /// Scroll so the longest visible line ends at the right edge
    RightmostColumn,

    // View
    /// Show or hide the line-number gutter
    ToggleLineNumbers,
    /// Show only matching lines, or all lines
    ToggleFiltering,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// Every message ends with the viewport clamp, so the top line and left
/// edge are valid afterwards whatever the message did.
pub fn update(mut model: Model, msg: Message) -> Model {
    tracing::trace!(?msg, top_line = model.top_line(), "update");

    match msg {
        // Pattern capture
        Message::StartCapture => {
            model.pattern.clear();
            model.mode = Mode::Capturing {
                matching_line: None,
            };
        }
        Message::CaptureInput(ch) => {
            if model.is_capturing() {
                model.pattern.push(ch);
                model.refresh_matching_line();
            }
        }
        Message::BackspaceCapture => {
            if model.is_capturing() && model.pattern.pop().is_some() {
                model.refresh_matching_line();
            }
        }
        Message::EndCapture => {
            if let Mode::Capturing { matching_line } = model.mode {
                model.mode = Mode::Idle;
                match matching_line {
                    Some(line) => model.viewport.set_top_line(line),
                    None if !model.pattern.is_empty() => {
                        let message = format!("Pattern not found: {}", model.pattern);
                        model.show_toast(ToastLevel::Warning, message);
                    }
                    None => {}
                }
                tracing::debug!(pattern = %model.pattern, ?matching_line, "capture committed");
            }
        }
        Message::CancelCapture => {
            if model.is_capturing() {
                model.mode = Mode::Idle;
                model.pattern.clear();
            }
        }

        // Matches
        Message::PreviousMatch => {
            let line = model
                .document
                .locate_previous_match(model.top_line(), &model.pattern);
            model.viewport.set_top_line(line);
        }
        Message::NextMatch => {
            let line = model
                .document
                .locate_next_match(model.top_line(), &model.pattern);
            model.viewport.set_top_line(line);
        }

        // Navigation
        Message::PreviousLine => model.viewport.scroll_up(1),
        Message::NextLine => model.viewport.scroll_down(1),
        Message::PreviousColumn => model.viewport.scroll_left(1),
        Message::NextColumn => model.viewport.scroll_right(1),
        Message::StartOfDocument => model.viewport.go_to_top(),
        Message::EndOfDocument => model.viewport.go_to_bottom(),
        Message::PreviousPage => model.viewport.page_up(),
        Message::NextPage => model.viewport.page_down(),
        Message::PreviousFilteredPage => {
            let line = paging::previous_filtered_page(
                &model.document,
                model.top_line(),
                &model.pattern,
                model.viewport.page_rows(),
            );
            model.viewport.set_top_line(line);
        }
        Message::NextFilteredPage => {
            let line = paging::next_filtered_page(
                &model.document,
                model.top_line(),
                &model.pattern,
                model.viewport.page_rows(),
            );
            model.viewport.set_top_line(line);
        }
        Message::LeftmostColumn => model.viewport.set_left_edge(0),
        Message::RightmostColumn => {
            let column = rightmost_column(&model);
            model.viewport.set_left_edge(column);
        }

        // View
        Message::ToggleLineNumbers => {
            model.show_line_numbers = !model.show_line_numbers;
        }
        Message::ToggleFiltering => {
            model.filtering = !model.filtering;
        }

        // Window
        Message::Resize(width, height) => {
            model.viewport.resize(width, height);
        }
        // Redraw: no state change needed
        Message::Redraw => {}

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }

    model.viewport.clamp();
    model
}

/// Left edge that puts the end of the widest visible line at the right edge.
fn rightmost_column(model: &Model) -> usize {
    let widest = model
        .visible_line_indices(model.viewport.page_rows())
        .filter_map(|idx| model.document.line(idx))
        .map(display_width)
        .max()
        .unwrap_or(0);
    (widest + model.margin_width()).saturating_sub(usize::from(model.viewport.width()))
}
