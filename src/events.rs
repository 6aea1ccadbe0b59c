//! Per-textarea event listeners

use std::fmt;

use crate::editable::HistoryEntry;

/// Kinds of notification a textarea emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An edit (typing or indentation) recorded a new snapshot
    Change,
    /// Undo or redo made an older or newer snapshot current
    History,
}

pub type Listener = Box<dyn FnMut(&HistoryEntry)>;

/// Listener registry owned by one textarea
#[derive(Default)]
pub struct Listeners {
    change: Vec<Listener>,
    history: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: EventKind, listener: Listener) {
        self.slot(kind).push(listener);
    }

    /// Call every listener registered for `kind`, in registration order
    pub fn emit(&mut self, kind: EventKind, entry: &HistoryEntry) {
        for listener in self.slot(kind).iter_mut() {
            listener(entry);
        }
    }

    fn slot(&mut self, kind: EventKind) -> &mut Vec<Listener> {
        match kind {
            EventKind::Change => &mut self.change,
            EventKind::History => &mut self.history,
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("change", &self.change.len())
            .field("history", &self.history.len())
            .finish()
    }
}
