//! The line store being viewed.
//!
//! A [`Document`] is an ordered, immutable list of text lines. It is
//! built once at startup and only read afterwards; every navigation and
//! search command queries it through the functions in [`crate::search`].

use std::path::Path;

use anyhow::{Context, Result};

/// An immutable, 0-indexed sequence of text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Create an empty document.
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// Split text into lines.
    ///
    /// Uses [`str::lines`], so `\r\n` endings are stripped and a trailing
    /// newline does not produce an extra empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(ToOwned::to_owned).collect(),
        }
    }

    /// Build a document from raw file bytes, decoding invalid UTF-8 lossily.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(&String::from_utf8_lossy(bytes))
    }

    /// Read a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Read a document, falling back to an empty one when the file is unreadable.
    ///
    /// The error is logged and returned alongside so the caller can surface it.
    pub fn load_or_empty(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::read(path) {
            Ok(doc) => {
                tracing::debug!(path = %path.display(), lines = doc.len(), "loaded document");
                (doc, None)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "falling back to empty document");
                (Self::empty(), Some(err))
            }
        }
    }

    /// Number of lines.
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the last line, or `None` for an empty document.
    pub const fn last_index(&self) -> Option<usize> {
        self.lines.len().checked_sub(1)
    }

    /// First line after `current` containing `pattern`.
    ///
    /// See [`crate::search::find_next_matching_line`].
    pub fn find_next_matching_line(&self, current: usize, pattern: &str) -> Option<usize> {
        crate::search::find_next_matching_line(&self.lines, current, pattern)
    }

    /// Last line before `current` containing `pattern`.
    pub fn find_previous_matching_line(&self, current: usize, pattern: &str) -> Option<usize> {
        crate::search::find_previous_matching_line(&self.lines, current, pattern)
    }

    /// Next match after `current`, wrapping to the top once.
    pub fn locate_next_match(&self, current: usize, pattern: &str) -> usize {
        crate::search::locate_next_match(&self.lines, current, pattern)
    }

    /// Previous match before `current`, wrapping to the bottom once.
    pub fn locate_previous_match(&self, current: usize, pattern: &str) -> usize {
        crate::search::locate_previous_match(&self.lines, current, pattern)
    }
}

impl<S: Into<String>> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}
