/// Text buffer wrapping `ropey::Rope`, exportable as immutable snapshots.
use std::fmt;

use anyhow::Result;
use ropey::Rope;

use crate::snapshot::BufferSnapshot;

/// A text buffer backed by a rope data structure for efficient editing.
///
/// Knows nothing about history: state only leaves and re-enters through
/// `export_snapshot` and `import_snapshot`.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

impl TextBuffer {
    /// Creates an empty text buffer.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Returns the full content as an owned string.
    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    /// Returns the total number of characters in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines in the buffer.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Appends text to the end of the buffer.
    pub fn append(&mut self, text: &str) {
        let end = self.rope.len_chars();
        self.rope.insert(end, text);
    }

    /// Inserts text at the given char index.
    ///
    /// # Errors
    ///
    /// Returns an error if the char index is out of bounds.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> Result<()> {
        if char_idx > self.rope.len_chars() {
            anyhow::bail!(
                "insert position {} out of bounds (buffer has {} chars)",
                char_idx,
                self.rope.len_chars()
            );
        }
        self.rope.insert(char_idx, text);
        Ok(())
    }

    /// Removes the character range [start..end) from the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is out of bounds.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<()> {
        if start > end {
            anyhow::bail!("invalid range: start ({}) > end ({})", start, end);
        }
        if end > self.rope.len_chars() {
            anyhow::bail!(
                "range end {} out of bounds (buffer has {} chars)",
                end,
                self.rope.len_chars()
            );
        }
        self.rope.remove(start..end);
        Ok(())
    }

    /// Removes all content.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
    }

    /// Captures the current content into a new snapshot.
    pub fn export_snapshot(&self) -> BufferSnapshot {
        BufferSnapshot::new(self.rope.to_string())
    }

    /// Replaces the current content with the snapshot's.
    pub fn import_snapshot(&mut self, snapshot: &BufferSnapshot) {
        self.rope = Rope::from_str(snapshot.saved_content());
        tracing::trace!("Restored {} chars from snapshot", snapshot.len_chars());
    }
}
