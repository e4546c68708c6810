//! Viewer state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete viewer state
//! - [`Message`]: All commands the viewer understands
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
pub mod paging;
mod update;

pub use model::{LINE_NUMBER_MARGIN, Mode, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Owns startup input and runs the terminal session.
pub struct App {
    file_path: PathBuf,
}

impl App {
    /// Create a viewer for the given file.
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}
