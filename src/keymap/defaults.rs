//! Default keybindings for a textarea
//!
//! Both `cmd` and `ctrl` variants are bound for undo/redo so the same keymap
//! works on macOS and elsewhere.

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// The bindings every textarea starts with
pub fn default_bindings() -> Vec<Keybinding> {
    vec![
        bind(KeyCode::Tab, Modifiers::NONE, Command::IndentLines),
        bind(KeyCode::Tab, Modifiers::SHIFT, Command::UnindentLines),
        bind(KeyCode::Char('z'), Modifiers::META, Command::Undo),
        bind(KeyCode::Char('z'), Modifiers::CTRL, Command::Undo),
        bind(
            KeyCode::Char('z'),
            Modifiers::META | Modifiers::SHIFT,
            Command::Redo,
        ),
        bind(
            KeyCode::Char('z'),
            Modifiers::CTRL | Modifiers::SHIFT,
            Command::Redo,
        ),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
