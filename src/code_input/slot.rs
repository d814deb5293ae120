//! Slot model: the per-position projection of the code buffer.

use crate::error::{CodeInputError, Result};

/// What a single slot displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SlotContent {
    Char(char),
    #[default]
    Empty,
}

impl SlotContent {
    pub fn as_char(&self) -> Option<char> {
        match self {
            SlotContent::Char(ch) => Some(*ch),
            SlotContent::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SlotContent::Empty)
    }
}

impl From<Option<char>> for SlotContent {
    fn from(ch: Option<char>) -> Self {
        match ch {
            Some(ch) => SlotContent::Char(ch),
            None => SlotContent::Empty,
        }
    }
}

/// One character position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot {
    pub content: SlotContent,
    pub cursor_visible: bool,
}

/// Fixed-size slot array.
///
/// The length is set at construction and never changes. State only moves
/// through [`Slots::set_character`] and [`Slots::set_cursor_visible`]; both
/// report whether the slot actually changed so the owner can emit per-slot
/// change notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots {
    slots: Vec<Slot>,
}

impl Slots {
    pub(crate) fn new(count: usize) -> Self {
        Self {
            slots: vec![Slot::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Index of the slot currently showing the cursor, if any
    pub fn cursor_index(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.cursor_visible)
    }

    /// Set the displayed content. Returns `Ok(true)` if the slot changed.
    pub fn set_character(&mut self, index: usize, content: SlotContent) -> Result<bool> {
        let slot = self.slot_mut(index)?;
        if slot.content == content {
            return Ok(false);
        }
        slot.content = content;
        Ok(true)
    }

    /// Toggle the cursor indicator. Returns `Ok(true)` if the slot changed.
    pub fn set_cursor_visible(&mut self, index: usize, visible: bool) -> Result<bool> {
        let slot = self.slot_mut(index)?;
        if slot.cursor_visible == visible {
            return Ok(false);
        }
        slot.cursor_visible = visible;
        Ok(true)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Slot> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(CodeInputError::IndexOutOfRange { index, len })
    }
}

impl<'a> IntoIterator for &'a Slots {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
