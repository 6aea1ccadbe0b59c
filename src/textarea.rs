//! Textarea - glues a text field, the indent transformer, and snapshot history
//! behind keyboard commands.
//!
//! After every operation the field shows the history's current entry. Edits
//! (indentation, debounced typing) record a snapshot and emit
//! [`EventKind::Change`]; undo/redo only move through history and emit
//! [`EventKind::History`].

use std::num::NonZeroUsize;
use std::time::Instant;

use crate::config::{ConfigError, Settings, TextareaConfig};
use crate::debounce::Debouncer;
use crate::editable::{
    decrease_indent, get_lines, increase_indent, HistoryEntry, HistoryStack, Line, Selection,
    Transform,
};
use crate::events::{EventKind, Listeners};
use crate::field::TextField;
use crate::keymap::{parse_key_alternatives, Command, Keybinding, Keymap, KeymapError, Keystroke};

#[derive(Debug)]
pub struct Textarea<F: TextField> {
    field: F,
    tab_size: NonZeroUsize,
    history: HistoryStack,
    keymap: Keymap,
    input: Debouncer,
    listeners: Listeners,
}

impl<F: TextField> Textarea<F> {
    /// Wrap `field`, validating `config` first
    pub fn new(field: F, config: &TextareaConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_settings(field, config.resolve()?))
    }

    /// Wrap `field` with already validated settings.
    ///
    /// The field's current value becomes the first history entry and the
    /// selection collapses to the start.
    pub fn with_settings(mut field: F, settings: Settings) -> Self {
        let initial = HistoryEntry::new(Selection::collapsed(0), field.value());
        field.set_selection(initial.selection);
        tracing::debug!(
            "Textarea created: tab_size={}, history_length={}, {} chars",
            settings.tab_size,
            settings.history_length,
            initial.value.chars().count()
        );

        Self {
            field,
            tab_size: settings.tab_size,
            history: HistoryStack::new(settings.history_length, initial),
            keymap: settings.keymap,
            input: Debouncer::new(settings.input_debounce),
            listeners: Listeners::new(),
        }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Mutable access for hosts that sync the widget's value into the field
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn into_field(self) -> F {
        self.field
    }

    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// The field's selection, clamped to its value
    pub fn selection(&self) -> Selection {
        self.field
            .selection()
            .clamp(self.field.value().chars().count())
    }

    pub fn set_selection(&mut self, selection: Selection) -> &mut Self {
        self.field.set_selection(selection);
        self
    }

    pub fn focus(&mut self) -> &mut Self {
        self.field.focus();
        self
    }

    pub fn blur(&mut self) -> &mut Self {
        self.field.blur();
        self
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Lines touched by the current selection
    pub fn lines(&self) -> Vec<Line<'_>> {
        get_lines(self.field.value(), self.field.selection())
    }

    /// Bind space-separated key alternatives (e.g. `"cmd+] ctrl+]"`) to `command`
    pub fn bind(&mut self, keys: &str, command: Command) -> Result<&mut Self, KeymapError> {
        for keystroke in parse_key_alternatives(keys)? {
            self.keymap.add_binding(Keybinding::new(keystroke, command));
        }
        Ok(self)
    }

    /// Register a listener for recorded edits
    pub fn on_change(&mut self, listener: impl FnMut(&HistoryEntry) + 'static) -> &mut Self {
        self.listeners.add(EventKind::Change, Box::new(listener));
        self
    }

    /// Register a listener for undo/redo navigation
    pub fn on_history(&mut self, listener: impl FnMut(&HistoryEntry) + 'static) -> &mut Self {
        self.listeners.add(EventKind::History, Box::new(listener));
        self
    }
}

// =============================================================================
// Commands
// =============================================================================

impl<F: TextField> Textarea<F> {
    /// Run the command bound to `keystroke`.
    ///
    /// Returns true if a binding matched, in which case the host should suppress
    /// the key's default action.
    pub fn handle_key(&mut self, keystroke: &Keystroke) -> bool {
        let Some(command) = self.keymap.lookup(keystroke) else {
            return false;
        };
        tracing::trace!("{} -> {}", keystroke, command);
        self.execute(command);
        true
    }

    /// Run `command`; returns true if the field changed
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::IndentLines => self.increase_indent(),
            Command::UnindentLines => self.decrease_indent(),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
        }
    }

    /// Indent every line touched by the selection
    pub fn increase_indent(&mut self) -> bool {
        self.flush();
        let transform = increase_indent(self.field.value(), self.selection(), self.tab_size);
        self.apply(transform)
    }

    /// Remove one indent level from every touched line that has one
    pub fn decrease_indent(&mut self) -> bool {
        self.flush();
        let transform = decrease_indent(self.field.value(), self.selection(), self.tab_size);
        self.apply(transform)
    }

    /// Show the previous snapshot; no-op at the oldest one
    pub fn undo(&mut self) -> bool {
        self.flush();
        let Some(entry) = self.history.undo().cloned() else {
            tracing::debug!("Nothing to undo");
            return false;
        };
        self.show(&entry);
        self.listeners.emit(EventKind::History, &entry);
        true
    }

    /// Show the next snapshot; no-op at the newest one
    pub fn redo(&mut self) -> bool {
        self.flush();
        let Some(entry) = self.history.redo().cloned() else {
            tracing::debug!("Nothing to redo");
            return false;
        };
        self.show(&entry);
        self.listeners.emit(EventKind::History, &entry);
        true
    }

    fn apply(&mut self, transform: Transform) -> bool {
        let entry = HistoryEntry::new(transform.selection, transform.value);
        self.show(&entry);
        self.record(entry)
    }

    /// Write an entry into the field
    fn show(&mut self, entry: &HistoryEntry) {
        if self.field.value() != entry.value {
            self.field.set_value(entry.value.clone());
        }
        self.field.set_selection(entry.selection);
    }

    /// Push an entry and notify listeners, unless it repeats the current one
    fn record(&mut self, entry: HistoryEntry) -> bool {
        if *self.history.current() == entry {
            tracing::trace!("Snapshot unchanged, not recorded");
            return false;
        }
        self.history.push(entry);
        let current = self.history.current().clone();
        self.listeners.emit(EventKind::Change, &current);
        true
    }
}

// =============================================================================
// Debounced input
// =============================================================================

impl<F: TextField> Textarea<F> {
    /// Report a raw input event (the field's value changed by typing or paste)
    pub fn input(&mut self, now: Instant) {
        self.input.schedule(now);
    }

    /// When a pending input snapshot is due, if any
    pub fn input_deadline(&self) -> Option<Instant> {
        self.input.deadline()
    }

    /// Record the pending input snapshot if its quiet period is over.
    ///
    /// The snapshot uses the field's value and selection at this moment.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.input.poll(now) {
            Some(_) => self.record_input(),
            None => false,
        }
    }

    /// Record any pending input snapshot immediately
    pub fn flush(&mut self) -> bool {
        match self.input.take() {
            Some(_) => self.record_input(),
            None => false,
        }
    }

    fn record_input(&mut self) -> bool {
        let entry = HistoryEntry::new(self.selection(), self.field.value());
        self.record(entry)
    }
}
