//! Text editing tests - insert, delete, set, clear

mod common;

use common::{assert_cursor_rule, record_changes, slot_chars, test_input, test_input_with_text};
use pincode::code_input::{Alphabet, CodeConstraints, CodeInput, ControlEvent, FillState};
use pincode::CodeInputError;

// ========================================================================
// Construction
// ========================================================================

#[test]
fn test_new_control_is_blank() {
    for digit in [1, 4, 6, 12] {
        let input = test_input(digit);
        assert!(input.is_empty());
        assert!(!input.is_filled());
        assert_eq!(input.slots().len(), digit);
        assert!(slot_chars(&input).iter().all(|c| c.is_none()));
    }
}

#[test]
fn test_single_slot_control() {
    let mut input = test_input(1);
    input.on_focus_gained();
    assert_eq!(input.cursor_position(), Some(0));
    assert!(input.insert_text("5"));
    assert!(input.is_filled());
    assert_eq!(input.cursor_position(), None);
}

#[test]
fn test_zero_digit_control_cannot_be_built() {
    assert_eq!(
        CodeInput::new(0, Alphabet::Numeric).unwrap_err(),
        CodeInputError::ZeroDigits
    );
    assert_eq!(
        CodeConstraints::new(0, Alphabet::Hex).unwrap_err(),
        CodeInputError::ZeroDigits
    );

    // with_constraints only takes validated constraints
    let input = CodeInput::with_constraints(CodeConstraints::pin(3).unwrap());
    assert_eq!(input.digit(), 3);
    assert!(input.is_empty());
    assert!(!input.is_filled());
}

// ========================================================================
// InsertText
// ========================================================================

#[test]
fn test_insert_first_digit() {
    let mut input = test_input(4);
    input.on_focus_gained();
    assert!(input.insert_text("1"));

    assert_eq!(input.text(), "1");
    assert_eq!(slot_chars(&input)[0], Some('1'));
    assert!(input.slots().get(1).unwrap().cursor_visible);
    assert_cursor_rule(&input);
}

#[test]
fn test_insert_overflowing_fragment_rejected() {
    let mut input = test_input_with_text(4, "123");
    let seen = record_changes(&mut input);

    assert!(!input.insert_text("45"));
    assert_eq!(input.text(), "123");
    assert!(seen.borrow().is_empty());
    assert!(input.drain_events().is_empty());
}

#[test]
fn test_insert_fragment_that_exactly_fills() {
    let mut input = test_input_with_text(4, "12");
    assert!(input.insert_text("34"));
    assert_eq!(input.fill_state(), FillState::Filled);
    assert_cursor_rule(&input);
}

#[test]
fn test_insert_letter_into_numeric_rejected() {
    let mut input = test_input_with_text(4, "12");
    assert!(!input.insert_text("a"));
    assert_eq!(input.text(), "12");
}

#[test]
fn test_insert_empty_fragment_changes_nothing() {
    let mut input = test_input_with_text(4, "1");
    let seen = record_changes(&mut input);
    let before = input.slots().clone();

    assert!(!input.insert_text(""));
    assert_eq!(input.slots(), &before);
    assert!(seen.borrow().is_empty());
    assert!(input.drain_events().is_empty());
}

#[test]
fn test_insert_into_filled_rejected() {
    let mut input = test_input_with_text(4, "1234");
    assert!(!input.insert_text("5"));
    assert_eq!(input.text(), "1234");
}

#[test]
fn test_insert_fires_both_channels() {
    let mut input = test_input(4);
    let seen = record_changes(&mut input);

    input.insert_text("9");

    assert_eq!(*seen.borrow(), vec!["9".to_string()]);
    let events = input.drain_events();
    assert_eq!(
        events
            .iter()
            .filter(|e| **e == ControlEvent::EditingChanged)
            .count(),
        1
    );
    assert!(events.contains(&ControlEvent::SlotChanged { index: 0 }));
}

#[test]
fn test_alphanumeric_alphabet() {
    let mut input = CodeInput::new(6, Alphabet::Alphanumeric).unwrap();
    assert!(input.insert_text("aZ9"));
    assert!(!input.insert_text("-"));
    assert_eq!(input.text(), "aZ9");
}

// ========================================================================
// DeleteBackward
// ========================================================================

#[test]
fn test_delete_from_filled() {
    let mut input = test_input_with_text(4, "1234");
    assert!(input.delete_backward());

    assert_eq!(input.text(), "123");
    assert!(!input.is_filled());
    assert_eq!(input.cursor_position(), Some(3));
    assert_eq!(slot_chars(&input), vec![Some('1'), Some('2'), Some('3'), None]);
}

#[test]
fn test_delete_until_empty() {
    let mut input = test_input_with_text(4, "12");
    assert!(input.delete_backward());
    assert!(input.delete_backward());
    assert!(!input.delete_backward());
    assert_eq!(input.fill_state(), FillState::Empty);
    assert_eq!(input.cursor_position(), Some(0));
}

#[test]
fn test_delete_notifies_both_channels() {
    let mut input = test_input_with_text(4, "12");
    let seen = record_changes(&mut input);
    input.delete_backward();
    assert_eq!(*seen.borrow(), vec!["1".to_string()]);
    assert!(input.drain_events().contains(&ControlEvent::EditingChanged));
}

// ========================================================================
// SetText
// ========================================================================

#[test]
fn test_set_text_round_trip() {
    let mut input = test_input(6);
    assert!(input.set_text("908172"));
    assert_eq!(input.text(), "908172");
    assert!(input.is_filled());
}

#[test]
fn test_set_text_rejects_partial_code() {
    let mut input = test_input_with_text(4, "1");
    let seen = record_changes(&mut input);
    assert!(!input.set_text("12"));
    assert!(!input.set_text(""));
    assert_eq!(input.text(), "1");
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_set_text_replaces_partial_buffer() {
    let mut input = test_input_with_text(4, "99");
    assert!(input.set_text("1234"));
    assert_eq!(slot_chars(&input), vec![Some('1'), Some('2'), Some('3'), Some('4')]);
    assert_cursor_rule(&input);
}

#[test]
fn test_set_text_has_no_editing_changed_event() {
    let mut input = test_input(4);
    let seen = record_changes(&mut input);
    input.set_text("4321");
    assert_eq!(seen.borrow().len(), 1);
    assert!(!input.drain_events().contains(&ControlEvent::EditingChanged));
}

// ========================================================================
// Enabled
// ========================================================================

#[test]
fn test_disabled_swallows_keystrokes() {
    let mut input = test_input_with_text(4, "12");
    input.set_enabled(false);
    let seen = record_changes(&mut input);

    assert!(!input.insert_text("3"));
    assert!(!input.delete_backward());
    assert_eq!(input.text(), "12");
    assert!(seen.borrow().is_empty());

    input.set_enabled(true);
    assert!(input.insert_text("3"));
}

#[test]
fn test_disabled_still_accepts_programmatic_set() {
    let mut input = test_input(4);
    input.set_enabled(false);
    assert!(input.set_text("1111"));
    assert!(input.clear());
}

// ========================================================================
// Clear
// ========================================================================

#[test]
fn test_clear_resets_to_empty() {
    let mut input = test_input_with_text(4, "123");
    let seen = record_changes(&mut input);

    assert!(input.clear());
    assert!(input.is_empty());
    assert_eq!(*seen.borrow(), vec![String::new()]);
    assert_eq!(input.cursor_position(), Some(0));
}

#[test]
fn test_clear_on_empty_is_quiet() {
    let mut input = test_input(4);
    let seen = record_changes(&mut input);
    assert!(!input.clear());
    assert!(seen.borrow().is_empty());
    assert!(input.drain_events().is_empty());
}

#[test]
fn test_clear_on_empty_leaves_cursor_and_queue_alone() {
    let mut input = test_input(4);
    input.on_focus_gained();
    input.set_enabled(false);
    input.drain_events();
    let seen = record_changes(&mut input);

    assert!(!input.clear());
    assert!(!input.clear());
    assert!(seen.borrow().is_empty());
    assert!(input.pending_events().is_empty());
    assert_eq!(input.cursor_position(), Some(0));
    assert_cursor_rule(&input);
}

// ========================================================================
// Event queue
// ========================================================================

#[test]
fn test_slot_changed_repeats_across_undrained_operations() {
    let mut input = test_input(4);

    input.insert_text("1");
    input.delete_backward();
    input.insert_text("2");

    assert_eq!(
        input.drain_events(),
        vec![
            ControlEvent::SlotChanged { index: 0 },
            ControlEvent::EditingChanged,
            ControlEvent::SlotChanged { index: 0 },
            ControlEvent::EditingChanged,
            ControlEvent::SlotChanged { index: 0 },
            ControlEvent::EditingChanged,
        ]
    );
}

// ========================================================================
// Change handler
// ========================================================================

#[test]
fn test_last_registered_handler_wins() {
    let mut input = test_input(4);
    let first = record_changes(&mut input);
    let second = record_changes(&mut input);

    input.insert_text("1");
    input.insert_text("2");

    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec!["1".to_string(), "12".to_string()]);
}

#[test]
fn test_handler_sees_projected_slots() {
    use std::cell::Cell;
    use std::rc::Rc;

    let mut input = test_input(4);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    input.register_change_handler(move |_| counter.set(counter.get() + 1));

    input.insert_text("12");
    input.delete_backward();
    input.set_text("0000");

    assert_eq!(calls.get(), 3);
    assert_eq!(input.slots().get(3).unwrap().content.as_char(), Some('0'));
}
