//! Linear undo over full `{room, furniture}` snapshots.
//!
//! The stack holds owned deep copies; restoring hands back a clone so the
//! live editor state never aliases a stored entry. A push after an undo
//! discards everything past the cursor. There is no redo.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use designs::{FurnitureItem, Room};

/// Committed editor state at one point in history.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub room: Room,
    pub furniture: Vec<FurnitureItem>,
}

/// Bounded snapshot stack with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    cursor: usize,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` snapshots
    /// (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), cursor: 0, capacity }
    }

    /// Record a committed state. Drops any entries after the cursor and
    /// evicts the oldest entry once over capacity.
    pub fn push(&mut self, snapshot: Snapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back and return a copy of the state it now points at.
    ///
    /// Returns `None`, leaving the cursor in place, when already at the
    /// earliest entry.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.current().cloned()
    }

    /// Discard everything and start over from `initial`.
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.cursor = 0;
        self.push(initial);
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Cursor position, or `None` while the history is empty.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        if self.entries.is_empty() { None } else { Some(self.cursor) }
    }

    /// Snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
