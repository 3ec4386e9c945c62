/// Snapshot-based undo/redo history.
///
/// Provides a `History` caretaker that stores full-state snapshots in
/// chronological order and moves a cursor through them. The history never
/// looks inside a snapshot: state flows in and out through the
/// `Originator` trait implemented by whatever is being edited.
pub mod config;
pub mod manager;
pub mod originator;

pub use config::{HistoryConfig, RedoPolicy};
pub use manager::History;
pub use originator::Originator;
