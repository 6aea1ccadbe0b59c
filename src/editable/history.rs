//! Snapshot history (undo/redo) for the text editing engine.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// A recorded buffer snapshot together with its selection.
///
/// Serializes flat as `{ "start", "end", "value" }`, which is also the payload
/// of change notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub selection: Selection,
    pub value: String,
}

impl HistoryEntry {
    pub fn new(selection: Selection, value: impl Into<String>) -> Self {
        Self {
            selection,
            value: value.into(),
        }
    }
}

/// Bounded, linear undo history of buffer snapshots.
///
/// Entries are stored newest first: index 0 is the most recent edit. The
/// cursor points at the entry currently shown; undo moves it towards older
/// entries, redo back towards index 0. The stack is never empty.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<HistoryEntry>,
    index: usize,
    capacity: NonZeroUsize,
}

impl HistoryStack {
    /// Create a history holding at most `capacity` entries, seeded with `initial`
    pub fn new(capacity: NonZeroUsize, initial: HistoryEntry) -> Self {
        let mut entries = VecDeque::with_capacity(capacity.get().min(128));
        entries.push_front(initial);
        Self {
            entries,
            index: 0,
            capacity,
        }
    }

    /// Record a new snapshot and make it current.
    ///
    /// Entries newer than the cursor (the ones undone past) are discarded first,
    /// then the oldest entries are evicted until the capacity holds.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.index > 0 {
            tracing::debug!("Discarding {} redo entries", self.index);
            self.entries.drain(..self.index);
        }
        self.index = 0;
        self.entries.push_front(entry);
        self.evict();
    }

    /// Drop entries from the tail until the length fits the capacity
    fn evict(&mut self) {
        while self.entries.len() > self.capacity.get() {
            self.entries.pop_back();
        }
    }

    /// Step one entry back in time.
    ///
    /// Returns the entry now current, or `None` if already at the oldest entry.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.index += 1;
        tracing::debug!("History undo -> {}/{}", self.index, self.entries.len());
        self.entries.get(self.index)
    }

    /// Step one entry forward in time.
    ///
    /// Returns the entry now current, or `None` if already at the newest entry.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.index -= 1;
        tracing::debug!("History redo -> {}/{}", self.index, self.entries.len());
        self.entries.get(self.index)
    }

    /// The entry at the cursor
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.index > 0
    }

    /// Cursor position (0 = newest)
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of retained entries (always >= 1)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the stack is seeded on construction
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
