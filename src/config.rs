//! Textarea configuration
//!
//! Read from YAML, e.g. `~/.config/textarea/config.yaml`:
//!
//! ```yaml
//! tab_size: 2
//! history_length: 200
//! input_debounce_ms: 250
//! bindings:
//!   - key: "ctrl+] alt+i"
//!     command: IndentLines
//! ```

use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::keymap::{default_bindings, parse_bindings, BindingConfig, Keymap, KeymapError};

/// Textarea options as written in a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextareaConfig {
    /// Spaces per indent level
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Maximum number of retained history snapshots
    #[serde(default = "default_history_length")]
    pub history_length: usize,

    /// Quiet period before a burst of typing becomes a snapshot
    #[serde(default = "default_input_debounce_ms")]
    pub input_debounce_ms: u64,

    /// Bindings added on top of the defaults
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<BindingConfig>,
}

fn default_tab_size() -> usize {
    4
}

fn default_history_length() -> usize {
    99
}

fn default_input_debounce_ms() -> u64 {
    300
}

impl Default for TextareaConfig {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            history_length: default_history_length(),
            input_debounce_ms: default_input_debounce_ms(),
            bindings: Vec::new(),
        }
    }
}

/// Validated configuration, ready for a `Textarea`
#[derive(Debug, Clone)]
pub struct Settings {
    pub tab_size: NonZeroUsize,
    pub history_length: NonZeroUsize,
    pub input_debounce: Duration,
    pub keymap: Keymap,
}

impl TextareaConfig {
    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_history_length(mut self, history_length: usize) -> Self {
        self.history_length = history_length;
        self
    }

    pub fn with_input_debounce_ms(mut self, ms: u64) -> Self {
        self.input_debounce_ms = ms;
        self
    }

    /// Parse config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the user config, or return defaults if there is none
    pub fn load_user() -> Result<Self, ConfigError> {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Validate the options and build the keymap
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let tab_size =
            NonZeroUsize::new(self.tab_size).ok_or(ConfigError::InvalidTabSize(self.tab_size))?;
        let history_length = NonZeroUsize::new(self.history_length)
            .ok_or(ConfigError::InvalidHistoryLength(self.history_length))?;

        let mut keymap = Keymap::with_bindings(default_bindings());
        for binding in parse_bindings(&self.bindings)? {
            keymap.add_binding(binding);
        }

        Ok(Settings {
            tab_size,
            history_length,
            input_debounce: Duration::from_millis(self.input_debounce_ms),
            keymap,
        })
    }
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTabSize(usize),
    InvalidHistoryLength(usize),
    Io(String),
    Parse(String),
    Keymap(KeymapError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTabSize(n) => {
                write!(f, "tab_size must be a positive integer, got {}", n)
            }
            ConfigError::InvalidHistoryLength(n) => {
                write!(f, "history_length must be a positive integer, got {}", n)
            }
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Keymap(e) => write!(f, "Keymap error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Keymap(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KeymapError> for ConfigError {
    fn from(e: KeymapError) -> Self {
        ConfigError::Keymap(e)
    }
}
