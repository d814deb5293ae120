//! Outbound events for the widget layer.
//!
//! These are independent of the change handler: the host gets the new code
//! value through the handler, the widget layer drains these to redraw and to
//! drive its responder chain.

/// Something the rendering or focus collaborator should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// An interactive edit changed the buffer
    EditingChanged,
    /// The slot at `index` changed content or cursor visibility
    SlotChanged { index: usize },
    /// A slot was tapped; the control wants to become first responder
    FocusRequested { slot: usize },
    /// The host asked the control to give up focus
    FocusResigned,
}

impl ControlEvent {
    /// Check if this event means the slot area needs a repaint
    pub fn needs_redraw(&self) -> bool {
        matches!(self, ControlEvent::SlotChanged { .. })
    }

    /// Check if this event is addressed to the focus collaborator
    pub fn is_focus(&self) -> bool {
        matches!(
            self,
            ControlEvent::FocusRequested { .. } | ControlEvent::FocusResigned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_classification() {
        assert!(ControlEvent::SlotChanged { index: 0 }.needs_redraw());
        assert!(!ControlEvent::EditingChanged.needs_redraw());
        assert!(ControlEvent::FocusRequested { slot: 1 }.is_focus());
        assert!(ControlEvent::FocusResigned.is_focus());
        assert!(!ControlEvent::EditingChanged.is_focus());
    }
}
