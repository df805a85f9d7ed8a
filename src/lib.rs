#![doc = include_str!("../readme.md")]

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod core;
pub mod wheel_input;

pub mod event {
    //!
    //! Event-handler traits and outcome.
    //!

    pub use rat_event::*;
    pub use rat_text::event::TextOutcome;
}

pub use crate::core::{EditableText, Number, NumberRange, WheelDirection};
pub use crate::wheel_input::{WheelInput, WheelInputState};

/// Errors when converting text to a number.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberError {
    /// The text is no number at all.
    NotANumber(String),
}

impl Display for NumberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberError::NotANumber(s) => write!(f, "not a number: {:?}", s),
        }
    }
}

impl Error for NumberError {}

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
