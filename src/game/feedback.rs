//! Warmer / Colder Classification

use std::fmt;
use serde::{Serialize, Deserialize};

/// Proximity feedback for a missed guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Feedback {
    /// No earlier guess to compare against
    FirstGuess = 0,
    /// Closer to the secret than the previous guess
    Warmer = 1,
    /// Farther from the secret than the previous guess
    Colder = 2,
    /// Exactly as far as the previous guess
    SameDistance = 3,
}

impl Feedback {
    /// Classify `guess` against the previous guess.
    ///
    /// `delta = |secret - last| - |secret - guess|`: positive is warmer,
    /// negative is colder.
    pub fn classify(secret: u32, last_guess: Option<u32>, guess: u32) -> Self {
        let Some(last) = last_guess else {
            return Feedback::FirstGuess;
        };

        let old_distance = secret.abs_diff(last);
        let new_distance = secret.abs_diff(guess);

        match old_distance.cmp(&new_distance) {
            std::cmp::Ordering::Greater => Feedback::Warmer,
            std::cmp::Ordering::Less => Feedback::Colder,
            std::cmp::Ordering::Equal => Feedback::SameDistance,
        }
    }

    /// Message shown to the player.
    pub fn message(self) -> &'static str {
        match self {
            Feedback::FirstGuess => "Drat! You missed!",
            Feedback::Warmer => "Getting warmer!",
            Feedback::Colder => "Getting colder...",
            Feedback::SameDistance => "Just as far as before!",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
