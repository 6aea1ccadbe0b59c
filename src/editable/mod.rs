//! Text editing engine behind the `Textarea` facade.
//!
//! Everything here is pure: functions take a buffer and a selection and return
//! new values, and the history owns its snapshots. No I/O, no events.
//!
//! # Architecture
//!
//! - [`Selection`]: `(start, end)` character offsets with defensive clamping
//! - [`get_lines`] / [`Line`]: maps a selection onto the lines it touches
//! - [`increase_indent`] / [`decrease_indent`]: rewrite touched lines and adjust
//!   the selection to match
//! - [`HistoryStack`] / [`HistoryEntry`]: bounded snapshot history with a cursor
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use textarea::editable::{increase_indent, Selection};
//!
//! let tab = NonZeroUsize::new(4).unwrap();
//! let result = increase_indent("ab\ncd", Selection::collapsed(0), tab);
//!
//! assert_eq!(result.value, "    ab\ncd");
//! assert_eq!(result.selection, Selection::collapsed(4));
//! ```

mod history;
mod indent;
mod lines;
mod selection;

pub use history::{HistoryEntry, HistoryStack};
pub use indent::{decrease_indent, increase_indent, Transform};
pub use lines::{get_lines, Line};
pub use selection::Selection;
