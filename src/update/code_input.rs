//! Code input update handler.
//!
//! Routes a CodeInputMsg to the matching CodeInput operation and maps the
//! outcome to a side-effect command for the widget layer.

use crate::code_input::{CodeInput, CodeInputMsg};
use crate::commands::Cmd;

/// Apply a message. Returns `None` when nothing visible changed.
pub fn update_code_input(input: &mut CodeInput, msg: CodeInputMsg) -> Option<Cmd> {
    match msg {
        // === Edits ===
        CodeInputMsg::InsertText(fragment) => redraw_if(input.insert_text(&fragment)),
        CodeInputMsg::DeleteBackward => redraw_if(input.delete_backward()),
        CodeInputMsg::SetText(candidate) => redraw_if(input.set_text(&candidate)),
        CodeInputMsg::Clear => redraw_if(input.clear()),

        CodeInputMsg::SetEnabled(enabled) => {
            input.set_enabled(enabled);
            None
        }

        // === Focus ===
        CodeInputMsg::FocusGained => {
            input.on_focus_gained();
            Some(Cmd::Redraw)
        }
        CodeInputMsg::FocusLost => {
            input.on_focus_lost();
            Some(Cmd::Redraw)
        }
        CodeInputMsg::TapSlot(slot) => match input.tap_slot(slot) {
            Ok(()) => Some(Cmd::batch(vec![Cmd::RequestFocus { slot }, Cmd::Redraw])),
            Err(err) => {
                tracing::warn!(%err, "ignoring tap outside the slot row");
                None
            }
        },
        CodeInputMsg::ResignFocus => {
            input.resign_focus();
            Some(Cmd::batch(vec![Cmd::ResignFocus, Cmd::Redraw]))
        }
    }
}

fn redraw_if(accepted: bool) -> Option<Cmd> {
    if accepted {
        Some(Cmd::Redraw)
    } else {
        None
    }
}
