//! Update functions for the Elm-style architecture
//!
//! All state transformations of a [`CodeInput`] driven by messages flow through here.

mod code_input;

use crate::code_input::{CodeInput, CodeInputMsg};
use crate::commands::Cmd;

#[cfg(debug_assertions)]
use crate::tracing::SlotSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use code_input::update_code_input;

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation and an invariant check.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(input: &mut CodeInput, msg: CodeInputMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(input, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_code_input(input, msg)
    }
}

#[cfg(debug_assertions)]
fn update_traced(input: &mut CodeInput, msg: CodeInputMsg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SlotSnapshot::from_input(input);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_code_input(input, msg);

    let after = SlotSnapshot::from_input(input);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "slots", %diff, "state changed");
    }

    input.assert_invariants(&msg_name);
    result
}

/// Get a display name for a message
///
/// Uses Debug formatting for argument-free messages. Code values are
/// replaced by one `*` per character, e.g. `InsertText(**)`.
pub fn msg_type_name(msg: &CodeInputMsg) -> String {
    match msg {
        CodeInputMsg::InsertText(fragment) => {
            format!("InsertText({})", "*".repeat(fragment.chars().count()))
        }
        CodeInputMsg::SetText(candidate) => {
            format!("SetText({})", "*".repeat(candidate.chars().count()))
        }
        other => format!("{:?}", other),
    }
}
