//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the widget layer should perform after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint the slot row
    Redraw,
    /// Ask the responder chain to make the control first responder
    RequestFocus { slot: usize },
    /// Ask the responder chain to drop first responder status
    ResignFocus,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Focus changes redraw once the responder chain calls back
            Cmd::RequestFocus { .. } => false,
            Cmd::ResignFocus => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Slot index of the first focus request in this command, if any
    pub fn focus_request(&self) -> Option<usize> {
        match self {
            Cmd::RequestFocus { slot } => Some(*slot),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.focus_request()),
            _ => None,
        }
    }
}
