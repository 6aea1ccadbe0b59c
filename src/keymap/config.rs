//! Key string parsing for keymaps
//!
//! Parses strings like `"shift+tab"` or `"cmd+z ctrl+z"` (space-separated
//! alternatives) and YAML binding entries into [`Keybinding`]s.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// A single binding entry from a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// One or more space-separated key strings
    pub key: String,
    pub command: String,
}

/// Convert config entries into keybindings
pub fn parse_bindings(entries: &[BindingConfig]) -> Result<Vec<Keybinding>, KeymapError> {
    let mut bindings = Vec::new();
    for entry in entries {
        let command = parse_command(&entry.command)?;
        for keystroke in parse_key_alternatives(&entry.key)? {
            bindings.push(Keybinding::new(keystroke, command));
        }
    }
    Ok(bindings)
}

/// Parse space-separated alternatives like `"cmd+z ctrl+z"`
pub fn parse_key_alternatives(keys: &str) -> Result<Vec<Keystroke>, KeymapError> {
    let keystrokes = keys
        .split_whitespace()
        .map(parse_key_string)
        .collect::<Result<Vec<_>, _>>()?;

    if keystrokes.is_empty() {
        return Err(KeymapError::InvalidKey(format!(
            "No key found in binding: {:?}",
            keys
        )));
    }
    Ok(keystrokes)
}

/// Parse a key string like "cmd+shift+z" into a Keystroke
///
/// The plus key itself is written as a trailing `+`: `"+"`, `"ctrl++"`.
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    let mut head = key_str;
    if let Some(rest) = key_str.strip_suffix('+') {
        if rest.is_empty() || rest.ends_with('+') {
            key_part = Some(KeyCode::Char('+'));
            head = rest.strip_suffix('+').unwrap_or(rest);
        }
    }
    let parts = if head.is_empty() && key_part.is_some() {
        None
    } else {
        Some(head.split('+'))
    };

    for part in parts.into_iter().flatten() {
        let part_lower = part.to_lowercase();
        match part_lower.as_str() {
            // `cmd` is the Meta key on every platform, as in browser key events
            "cmd" | "command" | "meta" | "super" | "win" => {
                mods = mods | Modifiers::META;
            }
            "ctrl" | "control" => {
                mods = mods | Modifiers::CTRL;
            }
            "shift" => {
                mods = mods | Modifiers::SHIFT;
            }
            "alt" | "option" | "opt" => {
                mods = mods | Modifiers::ALT;
            }
            _ => {
                if key_part.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(&part_lower)?);
            }
        }
    }

    let key = key_part
        .ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;

    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),
        "" => Err(KeymapError::InvalidKey("Empty key".to_string())),
        _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Parse a command name string into a Command enum
fn parse_command(cmd: &str) -> Result<Command, KeymapError> {
    Command::from_str(cmd).map_err(|_| KeymapError::InvalidCommand(cmd.to_string()))
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}
