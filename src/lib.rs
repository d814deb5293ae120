//! pincode - slot-based code input core
//!
//! This crate provides the state logic for fixed-length PIN/OTP entry
//! controls, driven Elm-style: messages in, side-effect commands out.

pub mod cli;
pub mod code_input;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod script;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use code_input::{Alphabet, CodeInput, CodeInputMsg, ControlEvent};
pub use commands::Cmd;
pub use config::CodeInputConfig;
pub use error::CodeInputError;
