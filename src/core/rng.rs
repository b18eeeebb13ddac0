//! Deterministic Random Number Generator
//!
//! Uses Xorshift128+ algorithm for fast, high-quality, deterministic randomness.
//! Given the same seed, produces identical sequence on all platforms.
//!
//! Games never draw randomness themselves. They take a [`SecretSource`] at
//! construction, which keeps the state machine reproducible under test.

/// Anything that can pick a secret for a new game.
pub trait SecretSource {
    /// Draw a value uniformly from `1..=max`.
    ///
    /// Implementations must treat a `max` of 0 as 1.
    fn draw_secret(&mut self, max: u32) -> u32;
}

/// Deterministic PRNG using Xorshift128+ algorithm.
///
/// # Example
///
/// ```
/// use golf_guess::core::rng::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let value = rng.next_u64();
/// assert_eq!(value, 6233086606872742541); // Always the same!
/// ```
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // Ensure state is never all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Create RNG seeded from the thread-local entropy pool.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a random integer in range [min, max].
    #[inline]
    pub fn next_int_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        // Modulo bias is negligible for a span this far below 2^64
        let span = (max - min) as u64 + 1;
        min + (self.next_u64() % span) as u32
    }
}

impl SecretSource for DeterministicRng {
    fn draw_secret(&mut self, max: u32) -> u32 {
        self.next_int_range(1, max.max(1))
    }
}

/// A source that always yields the same secret, clamped into `1..=max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSecret(pub u32);

impl SecretSource for FixedSecret {
    fn draw_secret(&mut self, max: u32) -> u32 {
        self.0.clamp(1, max.max(1))
    }
}

/// SplitMix64 for seed initialization.
/// Produces well-distributed values from sequential seeds.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

// =============================================================================
// TESTS
// =============================================================================
