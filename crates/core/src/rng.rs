//! RNG module - seedable generator for deck shuffling
//!
//! A simple LCG keeps deck construction fully deterministic: the same seed
//! always yields the same card layout, which tests and replays rely on.
//! The current state is exposed so restarts and snapshots can continue the
//! sequence instead of repeating it.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SessionRng {
    state: u32,
}

impl SessionRng {
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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice in place using Fisher-Yates
    ///
    /// Ascending variant: each index swaps with a random index at or after
    /// itself, so every permutation of the input is reachable.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        for i in 0..len {
            let j = i + self.next_range((len - i) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Get the current RNG state (for restarting with a fresh sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::new(1)
    }
}
