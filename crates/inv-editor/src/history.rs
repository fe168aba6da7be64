//! Undo/redo history: a linear, truncating snapshot stack.
//!
//! History is a vector of full [`CanvasState`] snapshots plus a cursor.
//! `snapshots[cursor]` is always the currently-displayed state. Committing
//! after one or more undos discards everything ahead of the cursor: the
//! abandoned redo branch is dropped, never merged or kept.
//!
//! Every snapshot is an independent deep copy (`CanvasState` owns all its
//! data), so later live mutation can never corrupt history. The stack is
//! unbounded for the session; snapshots persist until the editor is torn
//! down.

use inv_core::CanvasState;

/// `(snapshots, cursor)` state machine with exactly three transitions:
/// `commit` (truncate-forward + append, cursor → last), `undo` (cursor − 1,
/// clamped) and `redo` (cursor + 1, clamped).
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<CanvasState>,
    cursor: usize,
}

impl History {
    /// Start history with a single snapshot (the empty or default canvas)
    /// at cursor 0.
    pub fn new(initial: CanvasState) -> Self {
        Self { snapshots: vec![initial], cursor: 0 }
    }

    /// Record a new snapshot: drop the redo branch, append a deep copy of
    /// `state`, and move the cursor to it.
    pub fn commit(&mut self, state: &CanvasState) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(state.clone());
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot and return the now-current state. At the
    /// beginning this is a no-op that returns the unchanged current state.
    pub fn undo(&mut self) -> &CanvasState {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        &self.snapshots[self.cursor]
    }

    /// Step forward one snapshot and return the now-current state. At the
    /// end this is a no-op that returns the unchanged current state.
    pub fn redo(&mut self) -> &CanvasState {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
        }
        &self.snapshots[self.cursor]
    }

    /// The currently-displayed snapshot.
    pub fn current(&self) -> &CanvasState {
        &self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of snapshots currently held.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        // Never true: history always holds at least the initial snapshot.
        self.snapshots.is_empty()
    }

    /// Cursor position (index of the current snapshot).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
