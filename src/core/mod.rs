//! Core deterministic primitives.
//!
//! Randomness, fixed-point math and hashing shared by the game modules.

pub mod fixed;
pub mod vec2;
pub mod rng;
pub mod hash;

// Re-export core types
pub use fixed::{Fixed, FIXED_ONE};
pub use vec2::FixedVec2;
pub use rng::{DeterministicRng, SecretSource};
pub use hash::{SessionHash, SessionHasher};
