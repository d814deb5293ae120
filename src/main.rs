use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use pincode::cli::{CliArgs, EventSource};
use pincode::code_input::{CodeInput, CodeInputMsg, ControlEvent};
use pincode::config::CodeInputConfig;
use pincode::script::{parse_line, parse_script};
use pincode::update::update;
use pincode::view::{render_status_line, SlotStyle};

fn main() -> Result<()> {
    pincode::tracing::init();

    let args = CliArgs::parse();
    let base = match &args.config {
        Some(path) => CodeInputConfig::load_from(path)?,
        None => CodeInputConfig::load(),
    };
    let config = args.apply_to(base).map_err(anyhow::Error::msg)?;
    let mut input = config.build()?;
    let style = if args.masked {
        SlotStyle::Masked
    } else {
        SlotStyle::Plain
    };

    let digit = input.digit();
    input.register_change_handler(move |text| {
        if text.chars().count() == digit {
            tracing::info!("code complete");
        }
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.focus {
        apply(&mut input, CodeInputMsg::FocusGained, style, &mut out)?;
    } else {
        writeln!(out, "{}", render_status_line(&input, style))?;
    }

    match args.event_source() {
        EventSource::Args(events) => {
            let msgs = parse_script(&events.join("\n"))?;
            for msg in msgs {
                apply(&mut input, msg, style, &mut out)?;
            }
        }
        EventSource::Script(path) => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            let msgs = parse_script(&source)?;
            for msg in msgs {
                apply(&mut input, msg, style, &mut out)?;
            }
        }
        EventSource::Stdin => {
            for (i, line) in io::stdin().lock().lines().enumerate() {
                let line = line.context("Failed to read stdin")?;
                let msg = parse_line(&line)
                    .map_err(|message| anyhow::anyhow!("line {}: {}", i + 1, message))?;
                if let Some(msg) = msg {
                    apply(&mut input, msg, style, &mut out)?;
                }
            }
        }
    }

    Ok(())
}

/// Apply one message, drain its events, and print the slot row
fn apply(
    input: &mut CodeInput,
    msg: CodeInputMsg,
    style: SlotStyle,
    out: &mut impl Write,
) -> Result<()> {
    let cmd = update(input, msg);

    for event in input.drain_events() {
        match event {
            // No responder chain to forward to; tap_slot already focused the control
            ControlEvent::FocusRequested { slot } => {
                tracing::debug!(slot, "focus requested by tap");
            }
            ControlEvent::FocusResigned => tracing::debug!("focus resigned"),
            ControlEvent::EditingChanged => tracing::trace!("editing changed"),
            ControlEvent::SlotChanged { index } => tracing::trace!(index, "slot changed"),
        }
    }

    if cmd.is_none() {
        tracing::debug!("event rejected or had no visible effect");
    }
    writeln!(out, "{}", render_status_line(input, style))?;
    Ok(())
}
