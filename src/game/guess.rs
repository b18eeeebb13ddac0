//! Guess Input Coercion
//!
//! Players type guesses as text; callers holding a number pass it directly.
//! Both become a single numeric value before validation.

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::{MAX_VALUE, MIN_VALUE};

/// Why a guess was not accepted.
///
/// `Display` yields the message shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GuessError {
    /// Not a whole number in the valid range (this includes 0 and non-numeric text).
    #[error("Please guess a number between 1 and 100")]
    OutOfRange,
    /// Submitted earlier in the same game.
    #[error("You already guessed that number!")]
    DuplicateGuess(u32),
    /// The game has already ended.
    #[error("The game is over")]
    GameOver,
}

impl GuessError {
    /// Whether this rejection is reported to the player.
    ///
    /// `GameOver` is a silent no-op.
    pub fn is_reported(&self) -> bool {
        !matches!(self, GuessError::GameOver)
    }
}

/// A guess as submitted, before coercion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RawGuess {
    /// Text from an input field.
    Text(String),
    /// A number supplied programmatically.
    Number(f64),
}

impl RawGuess {
    /// Coerce to a number.
    ///
    /// Blank text becomes 0 and unparseable text becomes NaN; both fail
    /// validation as out of range.
    pub fn coerce(&self) -> f64 {
        match self {
            RawGuess::Number(n) => *n,
            RawGuess::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl fmt::Display for RawGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawGuess::Text(text) => write!(f, "{:?}", text),
            RawGuess::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for RawGuess {
    fn from(text: &str) -> Self {
        RawGuess::Text(text.to_string())
    }
}

impl From<String> for RawGuess {
    fn from(text: String) -> Self {
        RawGuess::Text(text)
    }
}

impl From<u32> for RawGuess {
    fn from(n: u32) -> Self {
        RawGuess::Number(n as f64)
    }
}

impl From<i32> for RawGuess {
    fn from(n: i32) -> Self {
        RawGuess::Number(n as f64)
    }
}

impl From<f64> for RawGuess {
    fn from(n: f64) -> Self {
        RawGuess::Number(n)
    }
}

/// Check a coerced value against the valid range.
///
/// Returns the value as an integer guess. Does not check for duplicates.
pub fn check_range(n: f64) -> Result<u32, GuessError> {
    // NaN, infinities, zero and fractions all land here
    if !n.is_finite() || n == 0.0 || n.fract() != 0.0 {
        return Err(GuessError::OutOfRange);
    }
    if n < MIN_VALUE as f64 || n > MAX_VALUE as f64 {
        return Err(GuessError::OutOfRange);
    }
    Ok(n as u32)
}
