//! Error types for the code input core.
//!
//! Invalid user input is never an error: rejected edits are silent no-ops.
//! Only collaborator and construction misuse surface here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeInputError {
    /// A control with zero slots is meaningless
    #[error("digit count must be at least 1")]
    ZeroDigits,

    /// A collaborator addressed a slot that does not exist
    #[error("slot index {index} out of range (control has {len} slots)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration describes an unusable control
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = CodeInputError> = std::result::Result<T, E>;
