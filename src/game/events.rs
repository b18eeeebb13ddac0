//! Game Events
//!
//! Every transition a game makes, in submission order, for logging and
//! replay comparison.

use serde::{Serialize, Deserialize};

use crate::game::feedback::Feedback;
use crate::game::guess::GuessError;

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Input was rejected and history left untouched
    GuessRejected {
        /// Raw input as typed
        input: String,
        /// Why it was rejected
        error: GuessError,
    },

    /// A wrong guess was recorded
    GuessMissed {
        /// The recorded guess
        guess: u32,
        /// Distance compared with the previous guess
        feedback: Feedback,
        /// Shots remaining after this one
        shots_left: usize,
    },

    /// The secret was guessed
    GameWon {
        /// The winning guess
        guess: u32,
        /// Shots taken, including the winning one
        shots: usize,
    },

    /// The last shot was used up
    GameLost {
        /// The number that was never found
        secret: u32,
    },

    /// The player asked for the answer
    GaveUp {
        /// The revealed secret
        secret: u32,
        /// Guesses recorded before giving up
        shots_taken: usize,
    },
}

/// A game event with its position in the log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Index of the submission that produced this event
    pub seq: u32,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(seq: u32, data: GameEventData) -> Self {
        Self { seq, data }
    }

    /// Create guess rejected event.
    pub fn guess_rejected(seq: u32, input: String, error: GuessError) -> Self {
        Self::new(seq, GameEventData::GuessRejected { input, error })
    }

    /// Create guess missed event.
    pub fn guess_missed(seq: u32, guess: u32, feedback: Feedback, shots_left: usize) -> Self {
        Self::new(
            seq,
            GameEventData::GuessMissed {
                guess,
                feedback,
                shots_left,
            },
        )
    }

    /// Create game won event.
    pub fn game_won(seq: u32, guess: u32, shots: usize) -> Self {
        Self::new(seq, GameEventData::GameWon { guess, shots })
    }

    /// Create game lost event.
    pub fn game_lost(seq: u32, secret: u32) -> Self {
        Self::new(seq, GameEventData::GameLost { secret })
    }

    /// Create gave up event.
    pub fn gave_up(seq: u32, secret: u32, shots_taken: usize) -> Self {
        Self::new(seq, GameEventData::GaveUp { secret, shots_taken })
    }

    /// Whether this event ends the game.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.data,
            GameEventData::GameWon { .. }
                | GameEventData::GameLost { .. }
                | GameEventData::GaveUp { .. }
        )
    }
}
