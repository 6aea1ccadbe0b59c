//! Text field abstraction the `Textarea` reads from and writes to.
//!
//! In a browser this is the `<textarea>` element; in tests and the CLI it is
//! [`MemoryField`]. Offsets are in characters, not bytes.

use crate::editable::Selection;

/// Accessor for the live text field.
///
/// Implementations backed by a real widget should refresh their value before
/// handing input events to the `Textarea`.
pub trait TextField {
    /// Current contents
    fn value(&self) -> &str;

    /// Replace the contents
    fn set_value(&mut self, value: String);

    /// Current selection
    fn selection(&self) -> Selection;

    /// Move the selection
    fn set_selection(&mut self, selection: Selection);

    /// Give the field keyboard focus
    fn focus(&mut self) {}

    /// Remove keyboard focus
    fn blur(&mut self) {}
}

/// TextField implementation wrapping a String.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    text: String,
    selection: Selection,
    focused: bool,
}

impl MemoryField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `text` with the cursor at the start
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            selection: Selection::collapsed(0),
            focused: false,
        }
    }

    /// Length in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replace the selected text with `text` and collapse the cursor after it,
    /// the way typing or pasting does.
    pub fn type_text(&mut self, text: &str) {
        let sel = self.selection.clamp(self.len_chars());
        let start = self.char_to_byte(sel.start);
        let end = self.char_to_byte(sel.end);
        self.text.replace_range(start..end, text);
        self.selection = Selection::collapsed(sel.start + text.chars().count());
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextField for MemoryField {
    fn value(&self) -> &str {
        &self.text
    }

    fn set_value(&mut self, value: String) {
        self.text = value;
        // Like a DOM textarea, a shorter value pulls the selection in.
        self.selection = self.selection.clamp(self.len_chars());
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamp(self.len_chars());
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}
