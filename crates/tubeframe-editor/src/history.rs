//! Snapshot history for undo/redo
//!
//! Whole-state snapshots in a bounded list: recording drops any redo
//! entries, and when the capacity is exceeded the oldest snapshot is
//! evicted. The history always holds at least the seed snapshot.

use crate::state::AppState;

/// Default maximum number of snapshots kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded undo/redo history over app state snapshots
#[derive(Debug, Clone)]
pub struct History {
    /// Snapshots, oldest first
    snapshots: Vec<AppState>,
    /// Index of the current snapshot
    index: usize,
    /// Maximum number of snapshots kept
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl History {
    /// Create a history seeded with an initial snapshot
    pub fn new(initial: AppState) -> Self {
        Self::with_capacity(initial, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history with a custom capacity (minimum 1)
    pub fn with_capacity(initial: AppState, capacity: usize) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record a snapshot after the current one, dropping any redo entries
    pub fn record(&mut self, snapshot: AppState) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Step back one snapshot
    pub fn undo(&mut self) -> Option<&AppState> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Option<&AppState> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// The snapshot at the current index
    pub fn current(&self) -> &AppState {
        &self.snapshots[self.index]
    }

    /// Count stored snapshots
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// States distinguishable through PartialEq
    fn state(marker: f32) -> AppState {
        AppState {
            snap_threshold: marker,
            ..AppState::default()
        }
    }

    #[test]
    fn test_seeded_history_has_no_steps() {
        let history = History::new(state(0.0));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current(), &state(0.0));
        assert_eq!(history.snapshot_count(), 1);
    }

    #[test]
    fn test_record_then_undo_and_redo() {
        let mut history = History::new(state(0.0));
        history.record(state(1.0));

        assert!(history.can_undo());
        assert_eq!(history.undo(), Some(&state(0.0)));
        assert!(!history.can_undo());
        assert!(history.can_redo());
        assert_eq!(history.redo(), Some(&state(1.0)));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_start_is_none() {
        let mut history = History::new(state(0.0));
        assert_eq!(history.undo(), None);
        assert_eq!(history.current(), &state(0.0));
    }

    #[test]
    fn test_record_after_undo_drops_redo_entries() {
        let mut history = History::new(state(0.0));
        history.record(state(1.0));
        history.record(state(2.0));
        history.undo();

        history.record(state(3.0));
        assert!(!history.can_redo());
        assert_eq!(history.current(), &state(3.0));
        assert_eq!(history.snapshot_count(), 3);
        assert_eq!(history.undo(), Some(&state(1.0)));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::with_capacity(state(0.0), 3);
        history.record(state(1.0));
        history.record(state(2.0));
        assert_eq!(history.snapshot_count(), 3);

        history.record(state(3.0));
        assert_eq!(history.snapshot_count(), 3);
        assert_eq!(history.current(), &state(3.0));
        assert!(!history.can_redo());

        // The seed snapshot is gone; the oldest reachable state is now 1.0
        assert_eq!(history.undo(), Some(&state(2.0)));
        assert_eq!(history.undo(), Some(&state(1.0)));
        assert!(!history.can_undo());
    }
}
