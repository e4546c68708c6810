// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. search::match_spans)
    clippy::module_name_repetitions
)]

//! # fv
//!
//! A terminal file viewer with incremental search.
//!
//! fv shows a text file in the terminal with:
//! - Incremental literal search (`/`), with wrap-around `n` / `p`
//! - A filtering mode that hides non-matching lines, including while paging
//! - Horizontal scrolling and an optional line-number gutter
//!
//! ## Architecture
//!
//! fv uses The Elm Architecture (TEA) pattern:
//! - **Model**: Viewer state
//! - **Message**: Commands
//! - **Update**: Pure state transitions, followed by a position clamp
//! - **View**: A [`ui::ViewModel`] snapshot drawn with ratatui
//!
//! ## Modules
//!
//! - [`app`]: Main application loop, state and key mapping
//! - [`document`]: The immutable line store
//! - [`search`]: Line matching
//! - [`ui`]: Viewport, view model and terminal rendering
//! - [`perf`]: Timing of load and draw

pub mod app;
pub mod document;
pub mod perf;
pub mod search;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::document::Document;
    pub use crate::ui::ViewModel;
    pub use crate::ui::viewport::Viewport;
}
