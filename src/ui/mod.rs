//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Terminal size and scroll position
//! - [`view_model`]: The per-frame snapshot the renderer draws
//! - [`style`]: Colors
//! - `width`: Display columns, shared by highlighting and clipping

pub mod style;
pub mod view_model;
pub mod viewport;

mod render;
mod status;
pub(crate) mod width;

pub use render::{clip_and_highlight, render};
pub use view_model::ViewModel;

#[cfg(test)]
mod tests;
