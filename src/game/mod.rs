//! Game Logic Module
//!
//! ## Module Structure
//!
//! - `guess`: Raw input coercion, validation errors
//! - `feedback`: Warmer / colder classification
//! - `state`: The `GuessGame` state machine
//! - `events`: Transition log for replay/verification
//! - `session`: Active game ownership, observers, replay
//! - `flight`: Golf ball arc and flag placement

pub mod guess;
pub mod feedback;
pub mod state;
pub mod events;
pub mod session;
pub mod flight;

// Re-export key types
pub use guess::{GuessError, RawGuess};
pub use feedback::Feedback;
pub use state::{GuessGame, GamePhase, Outcome};
pub use events::{GameEvent, GameEventData};
pub use session::{GameObserver, NullObserver, Session, replay_game};
pub use flight::{BallFlight, Course};
