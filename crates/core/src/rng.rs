//! RNG module - random sources for spawn placement and fall speed
//!
//! The director never constructs its own randomness; it holds a
//! [`RandomSource`] so tests can substitute a fixed sequence.
//!
//! - [`ThreadRandom`]: entropy-seeded, used by the game binary
//! - [`SimpleRng`]: LCG for deterministic runs, benches and tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Random value in the half-open range `[low, high)`.
    ///
    /// Returns `low` when the range is empty.
    fn next_range(&mut self, low: i32, high: i32) -> i32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, low: i32, high: i32) -> i32 {
        (**self).next_range(low, high)
    }
}

/// Non-deterministic source backed by `rand`.
#[derive(Debug, Clone)]
pub struct ThreadRandom {
    rng: StdRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current state, usable as a seed to replay the sequence
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (high as i64 - low as i64) as u64;
        // High bits of an LCG are the better distributed ones.
        let v = (self.next_u32() >> 8) as u64 % span;
        (low as i64 + v as i64) as i32
    }
}
