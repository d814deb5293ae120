//! Alphabet and length constraints for a code input control.
//!
//! Constraints decide which edits the controller accepts.

use serde::{Deserialize, Serialize};

use crate::error::{CodeInputError, Result};

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// The set of characters a code may contain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// ASCII digits `0`-`9`
    #[default]
    Numeric,
    /// ASCII letters and digits
    Alphanumeric,
    /// Hexadecimal digits, either case
    Hex,
    /// Caller-supplied filter (not representable in config files)
    #[serde(skip)]
    Custom(CharFilter),
}

impl Alphabet {
    /// Check if a character belongs to this alphabet
    pub fn allows(&self, ch: char) -> bool {
        match self {
            Alphabet::Numeric => ch.is_ascii_digit(),
            Alphabet::Alphanumeric => ch.is_ascii_alphanumeric(),
            Alphabet::Hex => ch.is_ascii_hexdigit(),
            Alphabet::Custom(filter) => filter(ch),
        }
    }

    /// Check that every character of `text` belongs to this alphabet
    pub fn allows_all(&self, text: &str) -> bool {
        text.chars().all(|ch| self.allows(ch))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Alphabet::Numeric)
    }

    /// Short name used in logs and the CLI
    pub fn name(&self) -> &'static str {
        match self {
            Alphabet::Numeric => "numeric",
            Alphabet::Alphanumeric => "alphanumeric",
            Alphabet::Hex => "hex",
            Alphabet::Custom(_) => "custom",
        }
    }
}

impl std::str::FromStr for Alphabet {
    type Err = CodeInputError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" | "digits" => Ok(Alphabet::Numeric),
            "alphanumeric" => Ok(Alphabet::Alphanumeric),
            "hex" => Ok(Alphabet::Hex),
            other => Err(CodeInputError::Config(format!(
                "unknown alphabet '{}'",
                other
            ))),
        }
    }
}

/// Fixed slot count plus the alphabet gating every edit.
///
/// Only constructible through [`CodeConstraints::new`], so `digit` is never zero.
///
/// ```compile_fail
/// use pincode::code_input::{Alphabet, CodeConstraints};
///
/// let zero = CodeConstraints { digit: 0, alphabet: Alphabet::Numeric };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CodeConstraints {
    digit: usize,
    alphabet: Alphabet,
}

impl CodeConstraints {
    /// Fails when `digit` is zero
    pub fn new(digit: usize, alphabet: Alphabet) -> Result<Self> {
        if digit == 0 {
            return Err(CodeInputError::ZeroDigits);
        }
        Ok(Self { digit, alphabet })
    }

    /// Number of slots; the buffer never grows past this
    pub fn digit(&self) -> usize {
        self.digit
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Numeric PIN of the given length
    pub fn pin(digit: usize) -> Result<Self> {
        Self::new(digit, Alphabet::Numeric)
    }

    /// Check if a character passes the alphabet
    pub fn is_char_allowed(&self, ch: char) -> bool {
        self.alphabet.allows(ch)
    }

    /// Check if appending `insert_len` characters would overflow the slots
    pub fn would_exceed_digit(&self, current_len: usize, insert_len: usize) -> bool {
        current_len + insert_len > self.digit
    }

    /// Exact-length, all-valid check used for full replacement
    pub fn is_complete_code(&self, candidate: &str) -> bool {
        candidate.chars().count() == self.digit && self.alphabet.allows_all(candidate)
    }
}
