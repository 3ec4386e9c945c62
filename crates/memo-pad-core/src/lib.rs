//! Text buffer and snapshot types for memo-pad.
//!
//! `TextBuffer` is the editable state, `BufferSnapshot` an immutable capture
//! of it, and `TextHistory` the snapshot history that moves between them.
pub mod buffer;
pub mod history;
pub mod snapshot;

pub use buffer::TextBuffer;
pub use history::{History, HistoryConfig, Originator, RedoPolicy, TextHistory};
pub use snapshot::BufferSnapshot;
