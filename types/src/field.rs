//! Bounded input fields for residues and the argument number.
//!
//! Every editing method returns `true` only when the text actually changed, so
//! callers can forward exactly the edits that need re-evaluation.

use thiserror::Error;

use crate::ui::{CursorMove, DraftInput};

/// Upper bound on residue length accepted by the form.
pub const MAX_RESIDUE_LEN: usize = 16;

/// Why a field's text is not a well-formed digit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldFormatError {
    #[error("'{found}' at position {position} is not a decimal digit")]
    NonDigit { position: usize, found: char },
    #[error("{len} characters exceeds the {max}-character limit")]
    TooLong { len: usize, max: usize },
}

/// Checks `text` against the residue rules: empty, or at most `max_len` decimal digits.
pub fn check_digits(text: &str, max_len: usize) -> Result<(), FieldFormatError> {
    let len = text.chars().count();
    if len > max_len {
        return Err(FieldFormatError::TooLong { len, max: max_len });
    }
    match text
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        Some((position, found)) => Err(FieldFormatError::NonDigit { position, found }),
        None => Ok(()),
    }
}

/// A text field holding at most `max_len` graphemes whose content should be decimal digits.
///
/// Non-digit characters are accepted as typed and reported through
/// [`DigitField::is_valid`]; only the length bound is enforced on input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitField {
    draft: DraftInput,
    max_len: usize,
}

impl Default for DigitField {
    fn default() -> Self {
        Self::new(MAX_RESIDUE_LEN)
    }
}

impl DigitField {
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            draft: DraftInput::default(),
            max_len: max_len.max(1),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.draft.text()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.draft.cursor()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.draft.grapheme_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draft.is_empty()
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    #[must_use]
    pub fn format_error(&self) -> Option<FieldFormatError> {
        check_digits(self.text(), self.max_len).err()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.format_error().is_none()
    }

    /// Highest argument number the hint advertises: the text length (0 when empty).
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.len()
    }

    /// Value displayed next to the argument field: one past `max_index`, except when empty.
    #[must_use]
    pub fn hint(&self) -> usize {
        if self.is_empty() {
            self.max_index()
        } else {
            self.max_index() + 1
        }
    }

    pub fn enter_char(&mut self, c: char) -> bool {
        if self.len() >= self.max_len {
            return false;
        }
        self.draft.enter_char(c);
        true
    }

    /// Inserts as much of `text` as fits. Returns whether anything was inserted.
    pub fn enter_text(&mut self, text: &str) -> bool {
        let room = self.max_len.saturating_sub(self.len());
        let accepted: String = text.chars().take(room).collect();
        if accepted.is_empty() {
            return false;
        }
        self.draft.enter_text(&accepted);
        true
    }

    pub fn delete_char(&mut self) -> bool {
        self.draft.delete_char()
    }

    pub fn delete_char_forward(&mut self) -> bool {
        self.draft.delete_char_forward()
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.draft.move_cursor(movement);
    }

    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.draft.clear();
        true
    }

    /// Replaces the text, truncated to `max_len` characters.
    pub fn set_text(&mut self, text: &str) -> bool {
        let truncated: String = text.chars().take(self.max_len).collect();
        if truncated == self.text() {
            return false;
        }
        self.draft.set_text(truncated);
        true
    }
}

/// Single-character argument number field.
///
/// Unlike [`DigitField`], non-digit keystrokes are rejected outright, so a
/// non-empty index is always a digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexField {
    draft: DraftInput,
}

impl IndexField {
    #[must_use]
    pub fn text(&self) -> &str {
        self.draft.text()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.draft.cursor()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draft.is_empty()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        check_digits(self.text(), 1).is_ok()
    }

    /// Numeric value of the argument number, if one is entered.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        let mut chars = self.text().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10),
            _ => None,
        }
    }

    pub fn enter_char(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || !self.is_empty() {
            return false;
        }
        self.draft.enter_char(c);
        true
    }

    /// Takes the first digit of `text`, if the field is empty.
    pub fn enter_text(&mut self, text: &str) -> bool {
        text.chars()
            .find(char::is_ascii_digit)
            .is_some_and(|c| self.enter_char(c))
    }

    pub fn delete_char(&mut self) -> bool {
        self.draft.delete_char()
    }

    pub fn delete_char_forward(&mut self) -> bool {
        self.draft.delete_char_forward()
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.draft.move_cursor(movement);
    }

    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.draft.clear();
        true
    }

    /// Replaces the text with the first digit of `text`, or clears it if there is none.
    pub fn set_text(&mut self, text: &str) -> bool {
        let next: String = text.chars().filter(char::is_ascii_digit).take(1).collect();
        if next == self.text() {
            return false;
        }
        self.draft.set_text(next);
        true
    }
}
