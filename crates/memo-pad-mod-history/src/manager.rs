/// Linear undo/redo over full-state snapshots.
///
/// Every `save` stores a complete snapshot exported by the originator.
/// Undo and redo move a cursor through the stored snapshots and hand the
/// one under the cursor back to the originator.
use crate::config::{HistoryConfig, RedoPolicy};
use crate::originator::Originator;

/// Snapshot history for a single originator.
///
/// `S` is never inspected; snapshots are only stored, and passed by
/// reference to `Originator::import_snapshot` on undo and redo.
pub struct History<S> {
    /// Saved snapshots, oldest first.
    snapshots: Vec<S>,
    /// Index of the active snapshot. `None` iff `snapshots` is empty.
    cursor: Option<usize>,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<S> std::fmt::Debug for History<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("len", &self.snapshots.len())
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> History<S> {
    /// Creates an empty history with the default config.
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Creates an empty history with the given config.
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Number of stored snapshots, including any ahead of the cursor.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the active snapshot, or `None` when empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<&S> {
        self.cursor.and_then(|idx| self.snapshots.get(idx))
    }

    /// Captures the originator's state and makes it the active snapshot.
    ///
    /// With `RedoPolicy::Truncate`, snapshots ahead of the cursor are
    /// dropped first. With `RedoPolicy::Retain` they stay stored behind the
    /// new snapshot.
    pub fn save<O>(&mut self, originator: &O)
    where
        O: Originator<Snapshot = S>,
    {
        let snapshot = originator.export_snapshot();

        if self.config.redo_policy == RedoPolicy::Truncate {
            if let Some(idx) = self.cursor {
                let dropped = self.snapshots.len() - (idx + 1);
                if dropped > 0 {
                    tracing::debug!("Discarding {dropped} redo snapshot(s)");
                    self.snapshots.truncate(idx + 1);
                }
            }
        }

        self.snapshots.push(snapshot);

        if self.config.is_over_depth(self.snapshots.len()) {
            let excess = self.snapshots.len() - self.config.max_depth;
            self.snapshots.drain(..excess);
            tracing::debug!("Evicted {excess} oldest snapshot(s)");
        }

        self.cursor = Some(self.snapshots.len() - 1);
        tracing::debug!(
            "Saved snapshot {} of {}",
            self.snapshots.len() - 1,
            self.snapshots.len()
        );
    }

    /// Whether an earlier snapshot exists.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(idx) if idx > 0)
    }

    /// Whether a later snapshot exists.
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(idx) if idx + 1 < self.snapshots.len())
    }

    /// Restores the previous snapshot into `originator`.
    ///
    /// Does nothing if `can_undo()` is false. Returns whether a step was taken.
    pub fn undo<O>(&mut self, originator: &mut O) -> bool
    where
        O: Originator<Snapshot = S>,
    {
        let Some(idx) = self.cursor.filter(|&idx| idx > 0) else {
            tracing::trace!("Nothing to undo");
            return false;
        };
        self.step_to(idx - 1, originator);
        true
    }

    /// Restores the next snapshot into `originator`.
    ///
    /// Does nothing if `can_redo()` is false. Returns whether a step was taken.
    pub fn redo<O>(&mut self, originator: &mut O) -> bool
    where
        O: Originator<Snapshot = S>,
    {
        let Some(idx) = self.cursor.filter(|&idx| idx + 1 < self.snapshots.len()) else {
            tracing::trace!("Nothing to redo");
            return false;
        };
        self.step_to(idx + 1, originator);
        true
    }

    /// Drops every snapshot. The originator is left untouched.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }

    fn step_to<O>(&mut self, idx: usize, originator: &mut O)
    where
        O: Originator<Snapshot = S>,
    {
        self.cursor = Some(idx);
        originator.import_snapshot(&self.snapshots[idx]);
        tracing::debug!("Moved to snapshot {idx} of {}", self.snapshots.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal originator: a string that snapshots by cloning.
    #[derive(Debug, Default)]
    struct Note {
        text: String,
    }

    impl Note {
        fn push(&mut self, s: &str) {
            self.text.push_str(s);
        }
    }

    impl Originator for Note {
        type Snapshot = String;

        fn export_snapshot(&self) -> String {
            self.text.clone()
        }

        fn import_snapshot(&mut self, snapshot: &String) {
            self.text.clone_from(snapshot);
        }
    }

    fn retaining() -> History<String> {
        History::with_config(HistoryConfig {
            redo_policy: RedoPolicy::Retain,
            ..Default::default()
        })
    }

    /// Saves "a", "ab", "abc" and returns the note at "abc".
    fn three_saves(history: &mut History<String>) -> Note {
        let mut note = Note::default();
        for s in ["a", "b", "c"] {
            note.push(s);
            history.save(&note);
        }
        note
    }

    #[test]
    fn test_empty_history() {
        let mut history: History<String> = History::new();
        let mut note = Note::default();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(history.current().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.undo(&mut note));
        assert!(!history.redo(&mut note));
    }

    #[test]
    fn test_single_save_cannot_undo() {
        let mut history = History::new();
        let mut note = Note::default();
        note.push("A");
        history.save(&note);

        assert_eq!(history.cursor(), Some(0));
        assert!(!history.can_undo());
        assert!(!history.undo(&mut note));
        assert_eq!(note.text, "A");
    }

    #[test]
    fn test_undo_redo_basic() {
        let mut history = History::new();
        let mut note = three_saves(&mut history);

        assert!(history.undo(&mut note));
        assert_eq!(note.text, "ab");
        assert_eq!(history.cursor(), Some(1));

        assert!(history.undo(&mut note));
        assert_eq!(note.text, "a");
        assert!(!history.can_undo());

        assert!(history.redo(&mut note));
        assert_eq!(note.text, "ab");
        assert!(history.redo(&mut note));
        assert_eq!(note.text, "abc");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_ignores_unsaved_edits_on_redo() {
        let mut history = History::new();
        let mut note = three_saves(&mut history);

        history.undo(&mut note);
        note.push("-scratch");
        history.redo(&mut note);
        assert_eq!(note.text, "abc");
    }

    #[test]
    fn test_noop_undo_leaves_state_unchanged() {
        let mut history = History::new();
        let mut note = three_saves(&mut history);
        history.undo(&mut note);
        history.undo(&mut note);
        note.push("!");

        assert!(!history.undo(&mut note));
        assert_eq!(note.text, "a!");
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn test_noop_redo_leaves_state_unchanged() {
        let mut history = History::new();
        let mut note = three_saves(&mut history);
        note.push("!");

        assert!(!history.redo(&mut note));
        assert_eq!(note.text, "abc!");
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn test_truncate_discards_redo_branch() {
        let mut history = History::new();
        let mut note = three_saves(&mut history);

        history.undo(&mut note);
        history.undo(&mut note);
        note.push("x");
        history.save(&note);

        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());

        assert!(history.undo(&mut note));
        assert_eq!(note.text, "a");
        assert!(!history.can_undo());
    }

    #[test]
    fn test_retain_keeps_stale_branch() {
        let mut history = retaining();
        let mut note = three_saves(&mut history);

        history.undo(&mut note);
        history.undo(&mut note);
        note.push("x");
        history.save(&note);

        assert_eq!(history.len(), 4);
        assert_eq!(history.cursor(), Some(3));
        assert!(!history.can_redo());

        // Undo walks back through the stale snapshots first.
        history.undo(&mut note);
        assert_eq!(note.text, "abc");
        history.undo(&mut note);
        assert_eq!(note.text, "ab");
    }

    #[test]
    fn test_save_without_undo_identical_under_both_policies() {
        let mut truncating = History::new();
        let mut retain = retaining();
        three_saves(&mut truncating);
        three_saves(&mut retain);

        assert_eq!(truncating.len(), retain.len());
        assert_eq!(truncating.cursor(), retain.cursor());
    }

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut history = History::with_config(HistoryConfig {
            max_depth: 3,
            ..Default::default()
        });
        let mut note = Note::default();
        for i in 0..10 {
            note.push(&i.to_string());
            history.save(&note);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.current().map(String::as_str), Some("0123456789"));

        while history.undo(&mut note) {}
        assert_eq!(note.text, "01234567");
    }

    #[test]
    fn test_max_depth_with_retained_branch() {
        let mut history = History::with_config(HistoryConfig {
            max_depth: 3,
            redo_policy: RedoPolicy::Retain,
        });
        let mut note = three_saves(&mut history);
        history.undo(&mut note);
        note.push("x");
        history.save(&note);

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.current().map(String::as_str), Some("abx"));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        let note = three_saves(&mut history);
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(note.text, "abc");
    }

    #[test]
    fn test_debug_does_not_require_debug_snapshots() {
        struct Opaque;
        let history: History<Opaque> = History::new();
        let out = format!("{history:?}");
        assert!(out.contains("len: 0"));
        assert!(out.contains("cursor: None"));
    }
}
