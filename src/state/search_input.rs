//! Search box editing (pure state transitions).
//!
//! The dashboard filters as the user types, so the text here is always the
//! live search term. `editing` only decides whether keystrokes go to the box
//! or to the key bindings.

/// Text and cursor of the search box.
///
/// `cursor` counts characters, not bytes, so multi-byte input edits cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
    editing: bool,
}

/// One editing operation on the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    /// Type a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move one character left.
    CursorLeft,
    /// Move one character right.
    CursorRight,
    /// Jump to the start.
    CursorHome,
    /// Jump to the end.
    CursorEnd,
}

impl SearchInput {
    /// A box pre-filled with `text`, cursor at the end, not editing.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            editing: false,
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True while keys go to the search box.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Start editing, cursor at the end of the existing text.
    pub fn activate(self) -> Self {
        let cursor = self.text.chars().count();
        Self {
            cursor,
            editing: true,
            ..self
        }
    }

    /// Stop editing and keep the text as the search term.
    pub fn submit(self) -> Self {
        Self {
            editing: false,
            ..self
        }
    }

    /// Stop editing and clear the text.
    pub fn cancel(self) -> Self {
        Self::default()
    }

    /// Apply an edit. No-op when not editing.
    pub fn apply(self, edit: SearchEdit) -> Self {
        if !self.editing {
            return self;
        }
        let Self {
            mut text,
            cursor,
            editing,
        } = self;
        let len = text.chars().count();

        let cursor = match edit {
            SearchEdit::Insert(ch) => {
                text.insert(byte_offset(&text, cursor), ch);
                cursor + 1
            }
            SearchEdit::Backspace => {
                if cursor > 0 {
                    text.remove(byte_offset(&text, cursor - 1));
                }
                cursor.saturating_sub(1)
            }
            SearchEdit::Delete => {
                if cursor < len {
                    text.remove(byte_offset(&text, cursor));
                }
                cursor
            }
            SearchEdit::CursorLeft => cursor.saturating_sub(1),
            SearchEdit::CursorRight => (cursor + 1).min(len),
            SearchEdit::CursorHome => 0,
            SearchEdit::CursorEnd => len,
        };

        Self {
            text,
            cursor,
            editing,
        }
    }
}

/// Byte offset of the `char_idx`-th character (or the end of the string).
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(offset, _)| offset)
}
