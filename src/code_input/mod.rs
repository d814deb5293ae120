//! Slot-based code input core.
//!
//! A fixed number of slots backed by one text buffer, used for PIN and OTP
//! entry. The rendering layer reads [`Slots`] and drains [`ControlEvent`]s;
//! the keyboard and gesture layers feed edits and focus changes in.
//!
//! # Architecture
//!
//! - [`CodeInput`]: owns the buffer, focus, enabled flag and edit protocol
//! - [`Slots`] / [`Slot`]: per-position projection (character + cursor)
//! - [`CodeConstraints`] / [`Alphabet`]: slot count and accepted characters
//! - [`ControlEvent`]: outbound notifications for the widget layer
//! - [`CodeInputMsg`]: message type for Elm-style dispatch
//! - [`InputTraits`]: keyboard hints for the input collaborator
//!
//! # Example
//!
//! ```
//! use pincode::code_input::{Alphabet, CodeInput};
//!
//! let mut input = CodeInput::new(4, Alphabet::Numeric).unwrap();
//! input.on_focus_gained();
//! assert!(input.insert_text("12"));
//! assert!(!input.insert_text("a"));
//!
//! assert_eq!(input.text(), "12");
//! assert_eq!(input.cursor_position(), Some(2));
//! ```

mod alphabet;
mod events;
mod messages;
mod slot;
mod state;
mod traits;

pub use alphabet::{Alphabet, CharFilter, CodeConstraints};
pub use events::ControlEvent;
pub use messages::CodeInputMsg;
pub use slot::{Slot, SlotContent, Slots};
pub use state::{ChangeHandler, CodeInput, FillState};
pub use traits::{
    Autocapitalization, InputTraits, KeyboardAppearance, KeyboardType, ReturnKey,
};
