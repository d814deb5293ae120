//! CodeInput - the controller that keeps buffer, slots, cursor and focus in sync.

use std::fmt;

use super::alphabet::{Alphabet, CodeConstraints};
use super::events::ControlEvent;
use super::slot::{SlotContent, Slots};
use super::traits::InputTraits;
use crate::error::{CodeInputError, Result};

/// Callback receiving the full buffer after every accepted mutation.
pub type ChangeHandler = Box<dyn FnMut(&str)>;

/// Undrained events kept before the oldest are discarded.
///
/// Hosts that only use the change handler never drain, so the queue is
/// trimmed to its newest half whenever an operation starts past this size.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Where the buffer sits relative to the slot count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillState {
    Empty,
    Partial,
    Filled,
}

/// Fixed-length, slot-based code input.
///
/// Owns the text buffer and the slot array. Every accepted edit runs the same
/// pipeline: mutate the buffer, re-project slots and cursor, then notify the
/// change handler (and, for interactive edits, queue
/// [`ControlEvent::EditingChanged`]). Rejected edits return `false` and leave
/// everything untouched.
pub struct CodeInput {
    buffer: String,
    slots: Slots,
    constraints: CodeConstraints,
    focused: bool,
    enabled: bool,
    input_traits: InputTraits,
    change_handler: Option<ChangeHandler>,
    events: Vec<ControlEvent>,
    /// Queue length when the current operation started
    op_start: usize,
}

impl CodeInput {
    /// Create an empty control with `digit` slots.
    ///
    /// Fails with [`CodeInputError::ZeroDigits`]
    /// when `digit` is zero.
    pub fn new(digit: usize, alphabet: Alphabet) -> Result<Self> {
        Ok(Self::with_constraints(CodeConstraints::new(digit, alphabet)?))
    }

    pub fn with_constraints(constraints: CodeConstraints) -> Self {
        Self {
            buffer: String::with_capacity(constraints.digit()),
            slots: Slots::new(constraints.digit()),
            input_traits: InputTraits::for_alphabet(constraints.alphabet()),
            constraints,
            focused: false,
            enabled: true,
            change_handler: None,
            events: Vec::new(),
            op_start: 0,
        }
    }

    pub fn set_input_traits(&mut self, traits: InputTraits) {
        self.input_traits = traits;
    }

    pub fn input_traits(&self) -> &InputTraits {
        &self.input_traits
    }

    pub fn constraints(&self) -> &CodeConstraints {
        &self.constraints
    }

    pub fn digit(&self) -> usize {
        self.constraints.digit()
    }

    /// Current buffer contents
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Buffer length in characters
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn has_text(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_filled(&self) -> bool {
        self.len() == self.digit()
    }

    pub fn fill_state(&self) -> FillState {
        match self.len() {
            0 => FillState::Empty,
            n if n == self.digit() => FillState::Filled,
            _ => FillState::Partial,
        }
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Slot index showing the cursor, `None` when unfocused or filled
    pub fn cursor_position(&self) -> Option<usize> {
        self.slots.cursor_index()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn can_become_focused(&self) -> bool {
        true
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled controls swallow keyboard edits; programmatic edits still apply.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::debug!(enabled, "code input enabled state changed");
        }
        self.enabled = enabled;
    }

    /// Replace the change handler (last registration wins)
    pub fn register_change_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.change_handler = Some(Box::new(handler));
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        self.op_start = 0;
        std::mem::take(&mut self.events)
    }

    /// Peek at queued events without consuming them
    pub fn pending_events(&self) -> &[ControlEvent] {
        &self.events
    }
}

// =============================================================================
// Edit Protocol
// =============================================================================

impl CodeInput {
    /// Replace the whole buffer.
    ///
    /// Only an exact-length, all-valid candidate is accepted. Partial codes
    /// must arrive through [`CodeInput::insert_text`].
    pub fn set_text(&mut self, candidate: &str) -> bool {
        if !self.constraints.is_complete_code(candidate) {
            tracing::trace!(
                candidate_len = candidate.chars().count(),
                digit = self.digit(),
                "set_text rejected"
            );
            return false;
        }

        self.buffer.clear();
        self.buffer.push_str(candidate);
        self.after_mutation(false);
        true
    }

    /// Append a keyboard fragment.
    pub fn insert_text(&mut self, fragment: &str) -> bool {
        if !self.enabled || fragment.is_empty() {
            return false;
        }

        let insert_len = fragment.chars().count();
        if self.constraints.would_exceed_digit(self.len(), insert_len) {
            tracing::trace!(len = self.len(), insert_len, "insert_text would overflow");
            return false;
        }
        if !self.constraints.alphabet().allows_all(fragment) {
            tracing::trace!(
                alphabet = self.constraints.alphabet().name(),
                "insert_text outside alphabet"
            );
            return false;
        }

        self.buffer.push_str(fragment);
        self.after_mutation(true);
        true
    }

    /// Remove the last character (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        if !self.enabled || self.buffer.pop().is_none() {
            return false;
        }
        self.after_mutation(true);
        true
    }

    /// Empty the buffer in one step. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        self.buffer.clear();
        self.after_mutation(true);
        true
    }

    fn after_mutation(&mut self, interactive: bool) {
        self.begin_operation();
        tracing::debug!(
            len = self.len(),
            digit = self.digit(),
            interactive,
            "code buffer changed"
        );
        self.sync_slots();
        if let Some(handler) = self.change_handler.as_mut() {
            handler(&self.buffer);
        }
        if interactive {
            self.events.push(ControlEvent::EditingChanged);
        }
    }
}

// =============================================================================
// Focus
// =============================================================================

impl CodeInput {
    pub fn on_focus_gained(&mut self) {
        self.begin_operation();
        self.focused = true;
        self.sync_cursor();
    }

    pub fn on_focus_lost(&mut self) {
        self.begin_operation();
        self.focused = false;
        for index in 0..self.digit() {
            self.apply_cursor(index, false);
        }
    }

    /// A slot was tapped. Focus the control without touching the buffer.
    pub fn tap_slot(&mut self, index: usize) -> Result<()> {
        if index >= self.digit() {
            return Err(CodeInputError::IndexOutOfRange {
                index,
                len: self.digit(),
            });
        }
        self.on_focus_gained();
        self.events.push(ControlEvent::FocusRequested { slot: index });
        Ok(())
    }

    /// Host-initiated focus loss
    pub fn resign_focus(&mut self) {
        self.on_focus_lost();
        self.events.push(ControlEvent::FocusResigned);
    }
}

// =============================================================================
// Slot Projection
// =============================================================================

impl CodeInput {
    fn sync_slots(&mut self) {
        let chars: Vec<char> = self.buffer.chars().collect();
        for index in 0..self.digit() {
            let content = SlotContent::from(chars.get(index).copied());
            match self.slots.set_character(index, content) {
                Ok(true) => self.mark_changed(index),
                Ok(false) => {}
                Err(err) => tracing::error!(%err, "slot projection failed"),
            }
        }
        self.sync_cursor();
    }

    fn sync_cursor(&mut self) {
        let pos = self.len();
        for index in 0..self.digit() {
            let visible = self.focused && index == pos;
            self.apply_cursor(index, visible);
        }
    }

    fn apply_cursor(&mut self, index: usize, visible: bool) {
        match self.slots.set_cursor_visible(index, visible) {
            Ok(true) => self.mark_changed(index),
            Ok(false) => {}
            Err(err) => tracing::error!(%err, "cursor projection failed"),
        }
    }
}

// =============================================================================
// Event Queue
// =============================================================================

impl CodeInput {
    /// Start a new operation: trim an overgrown queue and reset the dedup window.
    fn begin_operation(&mut self) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let dropped = self.events.len() - MAX_PENDING_EVENTS / 2;
            self.events.drain(..dropped);
            tracing::debug!(dropped, "undrained control events discarded");
        }
        self.op_start = self.events.len();
    }

    /// Queue `SlotChanged` once per slot within the current operation
    fn mark_changed(&mut self, index: usize) {
        let event = ControlEvent::SlotChanged { index };
        if !self.events[self.op_start..].contains(&event) {
            self.events.push(event);
        }
    }
}

// =============================================================================
// Invariants
// =============================================================================

impl CodeInput {
    /// Panic if buffer, slots and cursor disagree. Debug builds only.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        let len = self.len();
        assert!(
            len <= self.digit(),
            "[{}] buffer length {} exceeds digit {}",
            context,
            len,
            self.digit()
        );
        assert!(
            self.constraints.alphabet().allows_all(&self.buffer),
            "[{}] buffer contains characters outside the {} alphabet",
            context,
            self.constraints.alphabet().name()
        );

        let mut chars = self.buffer.chars();
        for (index, slot) in self.slots.iter().enumerate() {
            let expected = SlotContent::from(chars.next());
            assert!(
                slot.content == expected,
                "[{}] slot {} disagrees with buffer (slot empty={}, buffer len={})",
                context,
                index,
                slot.content.is_empty(),
                len
            );
            let cursor = self.focused && index == len;
            assert_eq!(
                slot.cursor_visible, cursor,
                "[{}] slot {} cursor_visible={} (focused={}, len={})",
                context, index, slot.cursor_visible, self.focused, len
            );
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self, _context: &str) {}
}

impl fmt::Debug for CodeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeInput")
            .field("len", &self.len())
            .field("digit", &self.digit())
            .field("alphabet", &self.constraints.alphabet().name())
            .field("focused", &self.focused)
            .field("enabled", &self.enabled)
            .field("has_change_handler", &self.change_handler.is_some())
            .field("pending_events", &self.events.len())
            .finish()
    }
}
