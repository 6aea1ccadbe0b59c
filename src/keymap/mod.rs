//! Keyboard mapping for the textarea
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to textarea commands
//! - Parses key strings such as `"shift+tab"` and `"cmd+z ctrl+z"`
//! - Accepts extra bindings from the YAML config
//!
//! # Architecture
//!
//! ```text
//! host key event → Keystroke → Keymap::lookup() → Command → Textarea::execute()
//! ```
//!
//! Translating real device events into [`Keystroke`]s is the host's job.

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{
    parse_bindings, parse_key_alternatives, parse_key_string, BindingConfig, KeymapError,
};
pub use defaults::default_bindings;
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
