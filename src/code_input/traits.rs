//! Keyboard hints handed to the input collaborator.

use serde::{Deserialize, Serialize};

use super::alphabet::Alphabet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardType {
    #[default]
    NumberPad,
    AsciiCapable,
    Default,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKey {
    #[default]
    Done,
    Go,
    Next,
    Send,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Autocapitalization {
    #[default]
    None,
    Characters,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardAppearance {
    #[default]
    Default,
    Dark,
    Light,
}

/// How the on-screen keyboard should be configured for this control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputTraits {
    pub keyboard_type: KeyboardType,
    pub return_key: ReturnKey,
    pub autocapitalization: Autocapitalization,
    pub autocorrection: bool,
    pub spell_checking: bool,
    pub keyboard_appearance: KeyboardAppearance,
    pub enables_return_key_automatically: bool,
}

impl Default for InputTraits {
    fn default() -> Self {
        Self {
            keyboard_type: KeyboardType::NumberPad,
            return_key: ReturnKey::Done,
            autocapitalization: Autocapitalization::None,
            autocorrection: false,
            spell_checking: false,
            keyboard_appearance: KeyboardAppearance::Default,
            enables_return_key_automatically: true,
        }
    }
}

impl InputTraits {
    /// Number pad for digit codes, a plain ASCII keyboard otherwise
    pub fn for_alphabet(alphabet: &Alphabet) -> Self {
        let keyboard_type = if alphabet.is_numeric() {
            KeyboardType::NumberPad
        } else {
            KeyboardType::AsciiCapable
        };
        Self {
            keyboard_type,
            ..Self::default()
        }
    }
}
