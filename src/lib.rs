//! Textarea - selection-aware indentation and snapshot undo/redo for
//! plain-text fields.
//!
//! The pure editing engine lives in [`editable`]; [`Textarea`] wires it to a
//! [`TextField`], a [`keymap::Keymap`] and debounced input.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod debounce;
pub mod editable;
pub mod events;
pub mod field;
pub mod keymap;
pub mod textarea;
pub mod tracing;

// Re-export commonly used types
pub use config::{ConfigError, Settings, TextareaConfig};
pub use editable::{HistoryEntry, HistoryStack, Selection};
pub use events::EventKind;
pub use field::{MemoryField, TextField};
pub use keymap::Command;
pub use textarea::Textarea;
