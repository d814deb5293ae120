//! Command-line argument parsing for the pincode driver
//!
//! Supports:
//! - Slot count and alphabet overrides
//! - Loading a YAML control config
//! - Events from arguments, a script file, or stdin

use std::path::PathBuf;

use clap::Parser;

use crate::code_input::Alphabet;
use crate::config::CodeInputConfig;

/// Drive a slot-based code input from an event script
#[derive(Parser, Debug)]
#[command(name = "pincode", version, about = "Drive a slot-based code input")]
pub struct CliArgs {
    /// Events to apply, one per argument (e.g. "type 12" backspace)
    #[arg(value_name = "EVENTS")]
    pub events: Vec<String>,

    /// Number of slots (overrides config)
    #[arg(short = 'd', long, value_name = "N")]
    pub digit: Option<usize>,

    /// Accepted characters: numeric, alphanumeric or hex (overrides config)
    #[arg(short = 'a', long, value_name = "NAME")]
    pub alphabet: Option<String>,

    /// Control config file (defaults to ~/.config/pincode/config.yaml)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read events from this file instead of stdin
    #[arg(short = 's', long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Focus the control before the first event
    #[arg(short = 'f', long)]
    pub focus: bool,

    /// Draw entered characters as bullets
    #[arg(short = 'm', long)]
    pub masked: bool,
}

/// Where events come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    Args(Vec<String>),
    Script(PathBuf),
    Stdin,
}

impl CliArgs {
    pub fn event_source(&self) -> EventSource {
        if !self.events.is_empty() {
            EventSource::Args(self.events.clone())
        } else if let Some(path) = &self.script {
            EventSource::Script(path.clone())
        } else {
            EventSource::Stdin
        }
    }

    /// Merge CLI overrides into a base config
    pub fn apply_to(&self, mut config: CodeInputConfig) -> Result<CodeInputConfig, String> {
        if let Some(digit) = self.digit {
            config.digit = digit;
        }
        if let Some(name) = &self.alphabet {
            config.alphabet = name.parse::<Alphabet>().map_err(|e| e.to_string())?;
            // Traits from a config file were chosen for its alphabet
            config.input_traits = None;
        }
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}
