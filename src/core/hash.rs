//! Session Hashing for Replay Verification
//!
//! A session fingerprint covers the secret, every recorded guess and the
//! final phase. Two runs over the same inputs must hash identically.

use sha2::{Sha256, Digest};

/// Hash output type (256 bits / 32 bytes)
pub type SessionHash = [u8; 32];

/// Deterministic hasher for game sessions.
///
/// Wraps SHA-256. Order of updates is part of the fingerprint.
pub struct SessionHasher {
    hasher: Sha256,
}

impl SessionHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for a guessing session.
    pub fn for_session() -> Self {
        Self::new(b"GOLF_GUESS_SESSION_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a length-prefixed list of u32 values.
    pub fn update_u32_list(&mut self, values: &[u32]) {
        self.update_u32(values.len() as u32);
        for value in values {
            self.update_u32(*value);
        }
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> SessionHash {
        self.hasher.finalize().into()
    }
}
