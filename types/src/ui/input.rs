//! Cursor-aware draft text and field focus for the form editor.

use unicode_segmentation::UnicodeSegmentation;

/// Which form field currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldId {
    #[default]
    Left,
    Right,
    Index,
}

impl FieldId {
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Index];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Zero residual",
            Self::Right => "One residual",
            Self::Index => "Argument number",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Index,
            Self::Index => Self::Left,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Left => Self::Index,
            Self::Right => Self::Left,
            Self::Index => Self::Right,
        }
    }
}

/// Cursor movement within a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Home,
    End,
}

/// Single-line text buffer with a grapheme-indexed cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.cursor = match movement {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => self.clamp_cursor(self.cursor.saturating_add(1)),
            CursorMove::Home => 0,
            CursorMove::End => self.grapheme_count(),
        };
    }

    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.move_cursor(CursorMove::Right);
    }

    pub fn enter_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let index = self.byte_index();
        self.text.insert_str(index, text);
        let inserted = text.graphemes(true).count();
        self.cursor = self.clamp_cursor(self.cursor.saturating_add(inserted));
    }

    /// Removes the grapheme before the cursor. Returns `false` at the start of the text.
    pub fn delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor(CursorMove::Left);
        true
    }

    /// Removes the grapheme under the cursor. Returns `false` at the end of the text.
    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }

        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.grapheme_count();
    }

    #[must_use]
    pub fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.grapheme_count())
    }
}
