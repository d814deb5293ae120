//! Line-oriented event scripts for driving a code input without a UI.
//!
//! One event per line. Keywords are case-insensitive; blank lines and `#`
//! comments are ignored.
//!
//! ```text
//! focus
//! type 12
//! backspace
//! tap 0
//! set 1234
//! ```

use thiserror::Error;

use crate::code_input::CodeInputMsg;

/// A script line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// Parse a single event line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(raw: &str) -> Result<Option<CodeInputMsg>, String> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, arg) = match line.split_once(char::is_whitespace) {
        Some((keyword, arg)) => (keyword, Some(arg.trim())),
        None => (line, None),
    };

    let msg = match (keyword.to_ascii_lowercase().as_str(), arg) {
        ("type", Some(fragment)) => CodeInputMsg::InsertText(fragment.to_string()),
        ("set", Some(candidate)) => CodeInputMsg::SetText(candidate.to_string()),
        ("tap", Some(index)) => {
            let index = index
                .parse::<usize>()
                .map_err(|_| format!("invalid slot index '{}'", index))?;
            CodeInputMsg::TapSlot(index)
        }
        ("backspace", None) => CodeInputMsg::DeleteBackward,
        ("clear", None) => CodeInputMsg::Clear,
        ("focus", None) => CodeInputMsg::FocusGained,
        ("blur", None) => CodeInputMsg::FocusLost,
        ("resign", None) => CodeInputMsg::ResignFocus,
        ("enable", None) => CodeInputMsg::SetEnabled(true),
        ("disable", None) => CodeInputMsg::SetEnabled(false),
        ("type" | "set" | "tap", None) => {
            return Err(format!("'{}' needs an argument", keyword));
        }
        (
            "backspace" | "clear" | "focus" | "blur" | "resign" | "enable" | "disable",
            Some(_),
        ) => {
            return Err(format!("'{}' takes no argument", keyword));
        }
        (other, _) => return Err(format!("unknown event '{}'", other)),
    };

    Ok(Some(msg))
}

/// Parse a whole script, stopping at the first bad line
pub fn parse_script(source: &str) -> Result<Vec<CodeInputMsg>, ParseError> {
    let mut msgs = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        match parse_line(raw) {
            Ok(Some(msg)) => msgs.push(msg),
            Ok(None) => {}
            Err(message) => return Err(ParseError { line: i + 1, message }),
        }
    }
    Ok(msgs)
}
