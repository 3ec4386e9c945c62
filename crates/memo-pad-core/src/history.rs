// Re-exports from memo-pad-mod-history and the originator bridge.
// Lets the history crate restore a `TextBuffer` without knowing about ropes.
pub use memo_pad_mod_history::{History, HistoryConfig, Originator, RedoPolicy};

use crate::buffer::TextBuffer;
use crate::snapshot::BufferSnapshot;

/// Snapshot history for a `TextBuffer`.
pub type TextHistory = History<BufferSnapshot>;

impl Originator for TextBuffer {
    type Snapshot = BufferSnapshot;

    fn export_snapshot(&self) -> BufferSnapshot {
        TextBuffer::export_snapshot(self)
    }

    fn import_snapshot(&mut self, snapshot: &BufferSnapshot) {
        TextBuffer::import_snapshot(self, snapshot);
    }
}
