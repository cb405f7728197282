//! RNG module - reseedable uniform random source for tile spawns
//!
//! A simple LCG is enough here: spawns only need a uniform pick among the
//! empty cells, and a fixed seed must replay the exact same game.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
    seed: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let seed = if seed == 0 { 1 } else { seed };
        Self { state: seed, seed }
    }

    /// Restart the sequence from a new seed
    pub fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Seed the current sequence started from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two-modulus LCG have
    /// short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Derive a seed from the current time
pub fn seed_from_time() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold the 128-bit timestamp so both seconds and sub-second bits count.
    (nanos ^ (nanos >> 32) ^ (nanos >> 64)) as u32
}
