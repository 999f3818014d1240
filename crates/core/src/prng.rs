//! Deterministic xorshift64 PRNG.
//!
//! The animation must replay bit-identically from a seed, so all randomness
//! (initial particle placement, palette picks, emitter draws) flows through
//! this generator. Pure integer state transitions keep it portable across
//! platforms.

use serde::{Deserialize, Serialize};

/// Seedable xorshift64 generator with the standard (13, 7, 17) shift triple.
///
/// State is serializable so a mid-run animation can be captured and resumed
/// without disturbing the stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Substitute seed for 0, which is a fixed point of xorshift.
    const ZERO_SEED_SUBSTITUTE: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a generator from `seed`. A seed of 0 is replaced with a
    /// non-zero substitute so the stream never collapses to all zeros.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 {
                Self::ZERO_SEED_SUBSTITUTE
            } else {
                seed
            },
        }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1), built from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform f64 in [-magnitude, magnitude). Used for initial and emitted
    /// particle velocities.
    pub fn next_centered(&mut self, magnitude: f64) -> f64 {
        self.next_range(-magnitude, magnitude)
    }

    /// Uniform usize in [0, max).
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }

    /// Bernoulli draw: true with probability `p` (clamped to [0, 1]).
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p.clamp(0.0, 1.0)
    }
}
