//! Command-line argument parsing
//!
//! The CLI loads text into a textarea, places the selection, replays a list of
//! keystrokes through the keymap, and prints the result:
//!
//! ```text
//! textarea notes.txt --select 0:40 --key tab --key tab --key ctrl+z
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::TextareaConfig;
use crate::config_paths;
use crate::editable::Selection;
use crate::keymap::{parse_key_string, Command, Keymap, KeymapError, Keystroke};

/// Indent, outdent, undo and redo a text buffer from the command line
#[derive(Parser, Debug)]
#[command(name = "textarea", version, about)]
pub struct CliArgs {
    /// File to read (stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Initial selection as `START:END` or `OFFSET` (character offsets)
    #[arg(short, long, value_name = "RANGE", value_parser = parse_selection)]
    pub select: Option<Selection>,

    /// Keystroke to replay, e.g. `tab`, `shift+tab`, `ctrl+z` (repeatable)
    #[arg(short, long = "key", value_name = "KEY")]
    pub keys: Vec<String>,

    /// Spaces per indent level (overrides the config file)
    #[arg(long, value_name = "N")]
    pub tab_size: Option<usize>,

    /// Maximum number of history snapshots (overrides the config file)
    #[arg(long, value_name = "N")]
    pub history_length: Option<usize>,

    /// Config file (defaults to ~/.config/textarea/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the final entry (value and selection) as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the whole history, newest first, as JSON
    #[arg(long, conflicts_with = "json")]
    pub history: bool,

    /// Print the effective config as YAML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Print each command with the keys bound to it and exit
    #[arg(long)]
    pub list_keys: bool,

    /// Also write debug logs to DIR (defaults to ~/.config/textarea/logs)
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub log_dir: Option<Option<PathBuf>>,
}

impl CliArgs {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, mut config: TextareaConfig) -> TextareaConfig {
        if let Some(tab_size) = self.tab_size {
            config.tab_size = tab_size;
        }
        if let Some(history_length) = self.history_length {
            config.history_length = history_length;
        }
        config
    }

    /// Parse the `--key` arguments
    pub fn keystrokes(&self) -> Result<Vec<Keystroke>, KeymapError> {
        self.keys.iter().map(|k| parse_key_string(k)).collect()
    }

    /// Directory for the file log, if `--log-dir` was given
    pub fn log_directory(&self) -> Option<PathBuf> {
        match &self.log_dir {
            Some(Some(dir)) => Some(dir.clone()),
            Some(None) => config_paths::logs_dir(),
            None => None,
        }
    }

    /// Whether input should come from stdin
    pub fn reads_stdin(&self) -> bool {
        match &self.file {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}

/// One line per command: its name followed by every key bound to it
pub fn describe_keymap(keymap: &Keymap) -> String {
    Command::ALL
        .iter()
        .map(|&command| {
            let keys: Vec<String> = keymap
                .keystrokes_for(command)
                .iter()
                .map(ToString::to_string)
                .collect();
            format!("{:<14} {}\n", command.name(), keys.join(" "))
        })
        .collect()
}

/// Parse `START:END` or a single offset into a selection
pub fn parse_selection(s: &str) -> Result<Selection, String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid offset {:?}: {}", part, e))
    };

    match s.split_once(':') {
        Some((start, end)) => Ok(Selection::new(parse(start)?, parse(end)?)),
        None => Ok(Selection::collapsed(parse(s)?)),
    }
}
