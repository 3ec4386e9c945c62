//! Capability trait for types whose state can be captured and restored.

/// Something whose full state can be exported as a snapshot and later
/// overwritten from one.
///
/// `History` only ever moves `Snapshot` values between its own storage and
/// the originator, so the snapshot type can stay fully opaque to it.
pub trait Originator {
    /// Immutable capture of the originator's state.
    type Snapshot;

    /// Captures the current state into a new, independent snapshot.
    fn export_snapshot(&self) -> Self::Snapshot;

    /// Replaces the current state with the one held by `snapshot`.
    fn import_snapshot(&mut self, snapshot: &Self::Snapshot);
}
