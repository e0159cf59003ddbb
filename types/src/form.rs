//! The three-field form and its pure readiness evaluation.

use crate::consistency::{ConsistencyPolicy, is_consistent};
use crate::field::{DigitField, IndexField, MAX_RESIDUE_LEN};
use crate::invocation::ReconstructionRequest;
use crate::ui::{CursorMove, FieldId};

/// Validation knobs, usually read from the `[form]` config table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    pub max_residue_len: usize,
    pub consistency: ConsistencyPolicy,
    /// Refuse to issue a request whose argument number exceeds the zero residue's `max_index`.
    pub enforce_index_bound: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            max_residue_len: MAX_RESIDUE_LEN,
            consistency: ConsistencyPolicy::default(),
            enforce_index_bound: true,
        }
    }
}

/// Why a complete set of inputs does not produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldReason {
    LeftFormat,
    RightFormat,
    IndexFormat,
    LengthMismatch { left: usize, right: usize },
    IndexOutOfBounds { index: u32, max: usize },
}

/// Outcome of evaluating the form against the invocation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    /// At least one field is empty.
    Incomplete,
    /// All fields are filled but the combination is not callable.
    Hold(HoldReason),
    Ready(ReconstructionRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    left: DigitField,
    right: DigitField,
    index: IndexField,
    settings: FormSettings,
}

impl Default for Form {
    fn default() -> Self {
        Self::new(FormSettings::default())
    }
}

impl Form {
    #[must_use]
    pub fn new(settings: FormSettings) -> Self {
        let max_len = settings.max_residue_len.clamp(1, MAX_RESIDUE_LEN);
        Self {
            left: DigitField::new(max_len),
            right: DigitField::new(max_len),
            index: IndexField::default(),
            settings: FormSettings {
                max_residue_len: max_len,
                ..settings
            },
        }
    }

    #[must_use]
    pub fn settings(&self) -> FormSettings {
        self.settings
    }

    #[must_use]
    pub fn left(&self) -> &DigitField {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &DigitField {
        &self.right
    }

    #[must_use]
    pub fn index(&self) -> &IndexField {
        &self.index
    }

    #[must_use]
    pub fn text(&self, id: FieldId) -> &str {
        match id {
            FieldId::Left => self.left.text(),
            FieldId::Right => self.right.text(),
            FieldId::Index => self.index.text(),
        }
    }

    #[must_use]
    pub fn cursor(&self, id: FieldId) -> usize {
        match id {
            FieldId::Left => self.left.cursor(),
            FieldId::Right => self.right.cursor(),
            FieldId::Index => self.index.cursor(),
        }
    }

    /// Consistency flag for the one-residue field, derived on every read.
    #[must_use]
    pub fn consistent(&self) -> bool {
        is_consistent(self.settings.consistency, &self.left, &self.right)
    }

    /// Whether the indicator under `id` should read as OK.
    ///
    /// The index also reads as not OK while the form is held on the index bound.
    #[must_use]
    pub fn indicator_ok(&self, id: FieldId) -> bool {
        match id {
            FieldId::Left => self.left.is_valid(),
            FieldId::Right => self.consistent(),
            FieldId::Index => {
                self.index.is_valid()
                    && !matches!(
                        self.readiness(),
                        Readiness::Hold(HoldReason::IndexOutOfBounds { .. })
                    )
            }
        }
    }

    pub fn enter_char(&mut self, id: FieldId, c: char) -> bool {
        match id {
            FieldId::Left => self.left.enter_char(c),
            FieldId::Right => self.right.enter_char(c),
            FieldId::Index => self.index.enter_char(c),
        }
    }

    pub fn enter_text(&mut self, id: FieldId, text: &str) -> bool {
        match id {
            FieldId::Left => self.left.enter_text(text),
            FieldId::Right => self.right.enter_text(text),
            FieldId::Index => self.index.enter_text(text),
        }
    }

    pub fn delete_char(&mut self, id: FieldId) -> bool {
        match id {
            FieldId::Left => self.left.delete_char(),
            FieldId::Right => self.right.delete_char(),
            FieldId::Index => self.index.delete_char(),
        }
    }

    pub fn delete_char_forward(&mut self, id: FieldId) -> bool {
        match id {
            FieldId::Left => self.left.delete_char_forward(),
            FieldId::Right => self.right.delete_char_forward(),
            FieldId::Index => self.index.delete_char_forward(),
        }
    }

    pub fn move_cursor(&mut self, id: FieldId, movement: CursorMove) {
        match id {
            FieldId::Left => self.left.move_cursor(movement),
            FieldId::Right => self.right.move_cursor(movement),
            FieldId::Index => self.index.move_cursor(movement),
        }
    }

    pub fn clear(&mut self, id: FieldId) -> bool {
        match id {
            FieldId::Left => self.left.clear(),
            FieldId::Right => self.right.clear(),
            FieldId::Index => self.index.clear(),
        }
    }

    pub fn set_text(&mut self, id: FieldId, text: &str) -> bool {
        match id {
            FieldId::Left => self.left.set_text(text),
            FieldId::Right => self.right.set_text(text),
            FieldId::Index => self.index.set_text(text),
        }
    }

    /// Replaces all three texts at once. Returns whether any of them changed.
    pub fn set_all(&mut self, left: &str, right: &str, index: &str) -> bool {
        let left_changed = self.left.set_text(left);
        let right_changed = self.right.set_text(right);
        let index_changed = self.index.set_text(index);
        left_changed || right_changed || index_changed
    }

    /// Applies the invocation rules to the current texts.
    #[must_use]
    pub fn readiness(&self) -> Readiness {
        if self.left.is_empty() || self.right.is_empty() || self.index.is_empty() {
            return Readiness::Incomplete;
        }
        if !self.left.is_valid() {
            return Readiness::Hold(HoldReason::LeftFormat);
        }
        if !self.right.is_valid() {
            return Readiness::Hold(HoldReason::RightFormat);
        }
        let Some(index) = self.index.value() else {
            return Readiness::Hold(HoldReason::IndexFormat);
        };
        if self.left.len() != self.right.len() {
            return Readiness::Hold(HoldReason::LengthMismatch {
                left: self.left.len(),
                right: self.right.len(),
            });
        }
        let max = self.left.max_index();
        if self.settings.enforce_index_bound && index as usize > max {
            return Readiness::Hold(HoldReason::IndexOutOfBounds { index, max });
        }

        Readiness::Ready(ReconstructionRequest::new(
            self.left.text(),
            self.right.text(),
            self.index.text(),
        ))
    }
}
