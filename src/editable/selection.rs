//! Selection type for the text editing engine.

use serde::{Deserialize, Serialize};

/// A text selection as a pair of character offsets into a buffer.
///
/// `start <= end` always holds for values produced by this crate. A selection
/// with `start == end` is a plain cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Offset of the first selected character
    pub start: usize,
    /// Offset one past the last selected character
    pub end: usize,
}

impl Selection {
    /// Create a selection, ordering the offsets if they arrive reversed
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Clamp both offsets into `[0, len]` and restore `start <= end`.
    ///
    /// Text fields can report transient inconsistent state during rapid edits,
    /// so callers clamp instead of rejecting.
    pub fn clamp(self, len: usize) -> Self {
        let end = self.end.min(len);
        let start = self.start.min(end);
        let clamped = Self { start, end };
        if clamped != self {
            tracing::warn!(
                "Clamped selection {}..{} to {}..{} (buffer has {} chars)",
                self.start,
                self.end,
                clamped.start,
                clamped.end,
                len
            );
        }
        clamped
    }
}
