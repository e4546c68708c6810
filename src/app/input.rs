use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};

use super::event_loop::ResizeDebouncer;

impl App {
    /// Turn a terminal event into a command, if it is one.
    ///
    /// Resizes are parked in `resizes` and applied once they settle.
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now: Instant,
        resizes: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                Some(Self::handle_key(*key, model))
            }
            Event::Resize(width, height) => {
                tracing::trace!(width, height, "resize queued");
                resizes.push(*width, *height, now);
                None
            }
            _ => None,
        }
    }

    /// Map a decoded key to a viewer command.
    ///
    /// Unbound keys become [`Message::Redraw`], which changes nothing but
    /// still runs the clamp.
    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Message {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if ctrl => Message::Quit,
            KeyCode::Char('l') if ctrl => Message::ToggleLineNumbers,
            KeyCode::Char('t') if ctrl => Message::ToggleFiltering,
            KeyCode::Char(c) if !ctrl && !alt => {
                if model.is_capturing() {
                    return Message::CaptureInput(c);
                }
                match c {
                    '/' => Message::StartCapture,
                    'n' => Message::NextMatch,
                    'p' => Message::PreviousMatch,
                    'q' => Message::Quit,
                    _ => Message::Redraw,
                }
            }

            // Capture editing
            KeyCode::Enter => Message::EndCapture,
            KeyCode::Esc => Message::CancelCapture,
            KeyCode::Backspace => Message::BackspaceCapture,

            // Vertical movement follows matches while filtering
            KeyCode::Up if model.filter_active() => Message::PreviousMatch,
            KeyCode::Down if model.filter_active() => Message::NextMatch,
            KeyCode::Up => Message::PreviousLine,
            KeyCode::Down => Message::NextLine,

            KeyCode::Left => Message::PreviousColumn,
            KeyCode::Right => Message::NextColumn,

            KeyCode::Home if ctrl => Message::StartOfDocument,
            KeyCode::End if ctrl => Message::EndOfDocument,
            KeyCode::Home => Message::LeftmostColumn,
            KeyCode::End => Message::RightmostColumn,

            KeyCode::PageUp if model.filtering => Message::PreviousFilteredPage,
            KeyCode::PageDown if model.filtering => Message::NextFilteredPage,
            KeyCode::PageUp => Message::PreviousPage,
            KeyCode::PageDown => Message::NextPage,

            _ => Message::Redraw,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut ratatui::Frame) {
        let view = crate::ui::ViewModel::from_model(model);
        crate::ui::render(&view, model.active_toast(), frame);
    }
}
