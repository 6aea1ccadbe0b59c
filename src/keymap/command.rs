//! Command enum representing the actions a textarea binds to keys

use std::fmt;
use std::str::FromStr;

/// All textarea commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Indent the touched lines by one level
    IndentLines,
    /// Remove one indent level from the touched lines
    UnindentLines,
    /// Restore the previous snapshot
    Undo,
    /// Re-apply the next snapshot
    Redo,
}

impl Command {
    /// Every command, in display order
    pub const ALL: [Command; 4] = [
        Command::IndentLines,
        Command::UnindentLines,
        Command::Undo,
        Command::Redo,
    ];

    /// Name used in config files
    pub fn name(&self) -> &'static str {
        match self {
            Command::IndentLines => "IndentLines",
            Command::UnindentLines => "UnindentLines",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IndentLines" | "Indent" | "indent" => Ok(Command::IndentLines),
            "UnindentLines" | "Unindent" | "Outdent" | "unindent" | "outdent" => {
                Ok(Command::UnindentLines)
            }
            "Undo" | "undo" => Ok(Command::Undo),
            "Redo" | "redo" => Ok(Command::Redo),
            _ => Err(()),
        }
    }
}
