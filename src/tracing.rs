//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging slot,
//! cursor and focus transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=slots=debug,message=debug` - scoped filtering
//! - `RUST_LOG=pincode::code_input=trace` - module-level filtering (shows rejected edits)
//!
//! # Log Files
//!
//! Logs are written to `~/.config/pincode/logs/pincode.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::code_input::{CodeInput, SlotContent};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// it never interleaves with rendered slot rows on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "pincode.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of slot state for diffing.
///
/// Characters are recorded only as filled/empty so snapshots are safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub len: usize,
    pub focused: bool,
    pub enabled: bool,
    pub cursor: Option<usize>,
    pub filled: Vec<bool>,
}

impl SlotSnapshot {
    pub fn from_input(input: &CodeInput) -> Self {
        Self {
            len: input.len(),
            focused: input.is_focused(),
            enabled: input.is_enabled(),
            cursor: input.cursor_position(),
            filled: input
                .slots()
                .iter()
                .map(|slot| slot.content != SlotContent::Empty)
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SlotSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if self.focused != other.focused {
            changes.push(format!("focused: {} → {}", self.focused, other.focused));
        }
        if self.enabled != other.enabled {
            changes.push(format!("enabled: {} → {}", self.enabled, other.enabled));
        }
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {:?} → {:?}", self.cursor, other.cursor));
        }
        for (i, (before, after)) in self.filled.iter().zip(&other.filled).enumerate() {
            if before != after {
                let status = if *after { "filled" } else { "cleared" };
                changes.push(format!("#{}: {}", i, status));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
