//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup.
///
/// A later binding for the same keystroke replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    lookup: HashMap<Keystroke, Command>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: impl IntoIterator<Item = Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding to the keymap
    pub fn add_binding(&mut self, binding: Keybinding) {
        if let Some(previous) = self.lookup.insert(binding.keystroke, binding.command) {
            if previous != binding.command {
                tracing::debug!(
                    "Rebound {} from {} to {}",
                    binding.keystroke,
                    previous,
                    binding.command
                );
            }
        }
    }

    /// Look up the command for a keystroke
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup.get(keystroke).copied()
    }

    /// All keystrokes bound to `command`, in display order
    pub fn keystrokes_for(&self, command: Command) -> Vec<Keystroke> {
        let mut strokes: Vec<Keystroke> = self
            .lookup
            .iter()
            .filter(|(_, c)| **c == command)
            .map(|(k, _)| *k)
            .collect();
        strokes.sort_by_key(|k| k.to_string());
        strokes
    }

    /// Number of bound keystrokes
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
