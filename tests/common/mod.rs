//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use textarea::{HistoryEntry, MemoryField, Selection, Textarea, TextareaConfig};

/// Create a textarea over `text` with default config
pub fn test_textarea(text: &str) -> Textarea<MemoryField> {
    Textarea::new(MemoryField::from_text(text), &TextareaConfig::default()).unwrap()
}

/// Create a textarea over `text` with the given config and selection
pub fn test_textarea_with(
    text: &str,
    config: &TextareaConfig,
    selection: Selection,
) -> Textarea<MemoryField> {
    let mut area = Textarea::new(MemoryField::from_text(text), config).unwrap();
    area.set_selection(selection);
    area
}

pub fn tab(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

pub fn entry(start: usize, end: usize, value: &str) -> HistoryEntry {
    HistoryEntry::new(Selection::new(start, end), value)
}

/// Record every change event emitted by `area`
pub fn record_changes(area: &mut Textarea<MemoryField>) -> Rc<RefCell<Vec<HistoryEntry>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    area.on_change(move |entry| sink.borrow_mut().push(entry.clone()));
    seen
}

/// Record every history (undo/redo) event emitted by `area`
pub fn record_history(area: &mut Textarea<MemoryField>) -> Rc<RefCell<Vec<HistoryEntry>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    area.on_history(move |entry| sink.borrow_mut().push(entry.clone()));
    seen
}
