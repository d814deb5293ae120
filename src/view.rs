//! Plain-text projection of the slot row.
//!
//! Used by the CLI and by tests as a stand-in rendering collaborator:
//! `[1][2][|][ ]` where `|` marks the cursor slot.

use crate::code_input::{CodeInput, Slot, SlotContent};

const CURSOR_GLYPH: char = '|';
const EMPTY_GLYPH: char = ' ';
const MASK_GLYPH: char = '•';

/// How filled slots are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotStyle {
    /// Show the entered characters
    #[default]
    Plain,
    /// Replace entered characters with a bullet
    Masked,
}

fn glyph(slot: &Slot, style: SlotStyle) -> char {
    match (slot.content, style) {
        (SlotContent::Char(ch), SlotStyle::Plain) => ch,
        (SlotContent::Char(_), SlotStyle::Masked) => MASK_GLYPH,
        (SlotContent::Empty, _) if slot.cursor_visible => CURSOR_GLYPH,
        (SlotContent::Empty, _) => EMPTY_GLYPH,
    }
}

/// Render every slot as `[c]`
pub fn render_slots(input: &CodeInput, style: SlotStyle) -> String {
    let mut out = String::with_capacity(input.digit() * 3);
    for slot in input.slots() {
        out.push('[');
        out.push(glyph(slot, style));
        out.push(']');
    }
    out
}

/// Slot row followed by a status column (text, focus, enabled)
pub fn render_status_line(input: &CodeInput, style: SlotStyle) -> String {
    let text = match style {
        SlotStyle::Plain => input.text().to_string(),
        SlotStyle::Masked => MASK_GLYPH.to_string().repeat(input.len()),
    };
    let mut flags = Vec::new();
    if input.is_focused() {
        flags.push("focused");
    }
    if !input.is_enabled() {
        flags.push("disabled");
    }
    if input.is_filled() {
        flags.push("filled");
    }

    let mut line = format!("{}  {:?}", render_slots(input, style), text);
    if !flags.is_empty() {
        line.push_str("  (");
        line.push_str(&flags.join(", "));
        line.push(')');
    }
    line
}
