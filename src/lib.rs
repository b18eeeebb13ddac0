//! # Golf Guess
//!
//! Hot-or-cold number guessing game with a deterministic, replayable core.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        GOLF GUESS                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Q16.16 fixed-point arithmetic             │
//! │  ├── vec2.rs     - 2D vector with fixed-point                │
//! │  ├── rng.rs      - Xorshift128+ PRNG, secret sources         │
//! │  └── hash.rs     - Session fingerprints for replays          │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── guess.rs    - Raw input coercion and guess errors       │
//! │  ├── feedback.rs - Warmer / colder classification            │
//! │  ├── state.rs    - GuessGame state machine                   │
//! │  ├── events.rs   - Transition log                            │
//! │  ├── session.rs  - Active game ownership, observers, replay  │
//! │  └── flight.rs   - Golf ball arc and flag placement          │
//! │                                                              │
//! │  config.rs       - Game configuration                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given the same secret and the same sequence of raw inputs, a game
//! produces identical outcomes, events and fingerprint. All randomness
//! enters through a [`SecretSource`] at construction time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use crate::core::rng::{DeterministicRng, SecretSource};
pub use game::feedback::Feedback;
pub use game::guess::{GuessError, RawGuess};
pub use game::session::{GameObserver, Session};
pub use game::state::{GamePhase, GuessGame, Outcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest value a secret can take, and the top of the valid guess range.
pub const MAX_VALUE: u32 = 100;

/// Smallest valid guess.
pub const MIN_VALUE: u32 = 1;

/// Guesses allowed per game.
pub const NUMBER_OF_SHOTS: usize = 10;
