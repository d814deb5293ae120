//! Message types for driving a code input.

/// Every input a collaborator can send into a [`CodeInput`](super::CodeInput).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeInputMsg {
    // === Keyboard ===
    /// Append a fragment (single keystroke or paste)
    InsertText(String),
    /// Delete the last character (Backspace)
    DeleteBackward,

    // === Host ===
    /// Replace the whole code; only exact-length codes are accepted
    SetText(String),
    /// Empty the buffer
    Clear,
    /// Enable or disable keyboard editing
    SetEnabled(bool),

    // === Focus ===
    /// The responder chain made this control first responder
    FocusGained,
    /// The control lost first responder status
    FocusLost,
    /// The slot at this index was tapped
    TapSlot(usize),
    /// The host wants the control to give up focus
    ResignFocus,
}

impl CodeInputMsg {
    /// Check if this message may modify the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            CodeInputMsg::InsertText(_)
                | CodeInputMsg::DeleteBackward
                | CodeInputMsg::SetText(_)
                | CodeInputMsg::Clear
        )
    }

    /// Check if this message changes focus
    pub fn is_focus(&self) -> bool {
        matches!(
            self,
            CodeInputMsg::FocusGained
                | CodeInputMsg::FocusLost
                | CodeInputMsg::TapSlot(_)
                | CodeInputMsg::ResignFocus
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_editing() {
        assert!(CodeInputMsg::InsertText("1".into()).is_editing());
        assert!(CodeInputMsg::DeleteBackward.is_editing());
        assert!(CodeInputMsg::Clear.is_editing());
        assert!(!CodeInputMsg::FocusGained.is_editing());
        assert!(!CodeInputMsg::SetEnabled(false).is_editing());
    }

    #[test]
    fn test_is_focus() {
        assert!(CodeInputMsg::TapSlot(2).is_focus());
        assert!(CodeInputMsg::FocusLost.is_focus());
        assert!(CodeInputMsg::ResignFocus.is_focus());
        assert!(!CodeInputMsg::SetText("1234".into()).is_focus());
    }
}
