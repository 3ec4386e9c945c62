//! Immutable capture of a text buffer's content.

/// A point-in-time copy of a `TextBuffer`'s content.
///
/// Owns its text outright, so later edits to the buffer never reach it.
/// Only `TextBuffer::export_snapshot` creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    saved_content: String,
}

impl BufferSnapshot {
    pub(crate) fn new(saved_content: String) -> Self {
        Self { saved_content }
    }

    /// Returns the captured content.
    pub fn saved_content(&self) -> &str {
        &self.saved_content
    }

    /// Returns the number of characters captured.
    pub fn len_chars(&self) -> usize {
        self.saved_content.chars().count()
    }
}
