//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use pincode::code_input::{Alphabet, CodeInput};

/// Numeric control with `digit` slots
pub fn test_input(digit: usize) -> CodeInput {
    CodeInput::new(digit, Alphabet::Numeric).unwrap()
}

/// Focused numeric control already holding `text` (typed, not set)
pub fn test_input_with_text(digit: usize, text: &str) -> CodeInput {
    let mut input = test_input(digit);
    input.on_focus_gained();
    assert!(input.insert_text(text), "seed text {:?} was rejected", text);
    input.drain_events();
    input
}

/// Register a change handler that records every value it receives
pub fn record_changes(input: &mut CodeInput) -> Rc<RefCell<Vec<String>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    input.register_change_handler(move |text| sink.borrow_mut().push(text.to_string()));
    seen
}

/// Characters shown by each slot
pub fn slot_chars(input: &CodeInput) -> Vec<Option<char>> {
    input.slots().iter().map(|s| s.content.as_char()).collect()
}

/// Indices of slots showing the cursor
pub fn cursor_slots(input: &CodeInput) -> Vec<usize> {
    input
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.cursor_visible)
        .map(|(i, _)| i)
        .collect()
}

/// Check the cursor rule: one cursor at `len` when focused and not filled, none otherwise
pub fn assert_cursor_rule(input: &CodeInput) {
    let cursors = cursor_slots(input);
    if input.is_focused() && !input.is_filled() {
        assert_eq!(cursors, vec![input.len()], "state: {:?}", input);
    } else {
        assert!(cursors.is_empty(), "unexpected cursor in {:?}", input);
    }
}
