//! Indent transformer: indent and outdent the lines touched by a selection.

use std::num::NonZeroUsize;

use super::lines::{get_lines, Line};
use super::selection::Selection;

/// Result of an indentation transform: the rewritten buffer and the selection
/// adjusted to cover the same text.
///
/// An outdent does not subtract a whole indent from an offset sitting inside
/// the removed spaces; it moves that offset to its line start instead, so the
/// selection never ends up on an earlier line or below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    pub value: String,
    pub selection: Selection,
    /// Number of lines whose indentation changed
    pub changed_lines: usize,
}

/// Insert `tab_size` spaces at the start of every line touched by `selection`.
///
/// The selection start moves by one indent (its own line always gains one in
/// front of it) and the end moves by one indent per affected line.
pub fn increase_indent(buffer: &str, selection: Selection, tab_size: NonZeroUsize) -> Transform {
    let tab = tab_size.get();
    let selection = selection.clamp(buffer.chars().count());
    let lines = get_lines(buffer, selection);
    let indent = " ".repeat(tab);

    let body = lines
        .iter()
        .map(|line| format!("{}{}", indent, line.text))
        .collect::<Vec<_>>()
        .join("\n");

    let transform = Transform {
        value: rebuild(buffer, &lines, &body),
        selection: Selection {
            start: selection.start + tab,
            end: selection.end + tab * lines.len(),
        },
        changed_lines: lines.len(),
    };
    tracing::debug!(
        "Indented {} line(s): selection {}..{} -> {}..{}",
        lines.len(),
        selection.start,
        selection.end,
        transform.selection.start,
        transform.selection.end
    );
    transform
}

/// Remove one indent (`tab_size` leading spaces) from every touched line that has one.
///
/// Lines without a full indent are left as they are and do not shift any
/// offsets. An offset that falls inside a removed indent snaps to the start of
/// its line.
pub fn decrease_indent(buffer: &str, selection: Selection, tab_size: NonZeroUsize) -> Transform {
    let tab = tab_size.get();
    let selection = selection.clamp(buffer.chars().count());
    let lines = get_lines(buffer, selection);

    let mut outdented = Vec::new();
    let body = lines
        .iter()
        .map(|line| {
            if line.has_indent(tab) {
                outdented.push(line.start);
                // The indent is ASCII, so `tab` chars are `tab` bytes.
                &line.text[tab..]
            } else {
                line.text
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let shift = |offset: usize| -> usize {
        let removed: usize = outdented
            .iter()
            .filter(|&&line_start| offset > line_start)
            .map(|&line_start| (offset - line_start).min(tab))
            .sum();
        offset - removed
    };

    let transform = Transform {
        value: rebuild(buffer, &lines, &body),
        selection: Selection {
            start: shift(selection.start),
            end: shift(selection.end),
        },
        changed_lines: outdented.len(),
    };
    tracing::debug!(
        "Outdented {} of {} line(s): selection {}..{} -> {}..{}",
        outdented.len(),
        lines.len(),
        selection.start,
        selection.end,
        transform.selection.start,
        transform.selection.end
    );
    transform
}

/// Replace the contiguous run of `lines` in `buffer` with `body`.
fn rebuild(buffer: &str, lines: &[Line<'_>], body: &str) -> String {
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return buffer.to_string();
    };
    let prefix = &buffer[..byte_offset(buffer, first.start)];
    let suffix = &buffer[byte_offset(buffer, last.end)..];

    let mut value = String::with_capacity(prefix.len() + body.len() + suffix.len());
    value.push_str(prefix);
    value.push_str(body);
    value.push_str(suffix);
    value
}

/// Convert a char offset to a byte offset (clamped to the buffer length)
fn byte_offset(buffer: &str, char_offset: usize) -> usize {
    buffer
        .char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(buffer.len())
}
