//! Selection translator: maps a selection onto the lines it touches.

use super::selection::Selection;

/// A line of a buffer, located by character offsets.
///
/// `end` is the offset just past the line's last character, so for every line
/// but the last, `end + 1` is the start of the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Offset of the first character
    pub start: usize,
    /// Offset just past the last character (the newline position)
    pub end: usize,
    /// Line content without the newline
    pub text: &'a str,
}

impl Line<'_> {
    /// Whether the line starts with (at least) `width` space characters
    pub fn has_indent(&self, width: usize) -> bool {
        let mut chars = self.text.chars();
        (0..width).all(|_| chars.next() == Some(' '))
    }
}

/// Lines touched by `selection`, in buffer order.
///
/// The first line is the one containing `selection.start` (a cursor sitting on a
/// newline belongs to the line it ends). Scanning stops at the first line that
/// begins after `selection.end`. The selection is clamped to the buffer first,
/// so the result always holds at least one line.
pub fn get_lines(buffer: &str, selection: Selection) -> Vec<Line<'_>> {
    let total = buffer.chars().count();
    let selection = selection.clamp(total);

    let mut lines = Vec::new();
    let mut line_end = 0;
    let mut in_selection = false;

    for (index, text) in buffer.split('\n').enumerate() {
        if index > 0 {
            line_end += 1;
        }
        let line_start = line_end;
        line_end += text.chars().count();
        let line = Line {
            start: line_start,
            end: line_end,
            text,
        };

        if in_selection && line_start > selection.end {
            break;
        }
        if !in_selection {
            if line_end >= selection.start {
                in_selection = true;
                lines.push(line);
            }
        } else if line_start >= selection.start && line_end <= selection.end {
            lines.push(line);
        } else if line_end >= selection.end {
            lines.push(line);
        }
    }

    tracing::trace!(
        "Selection {}..{} touches {} line(s)",
        selection.start,
        selection.end,
        lines.len()
    );
    lines
}
