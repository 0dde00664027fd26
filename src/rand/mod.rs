//! Random number generation seeded from hardware entropy.
//!
//! Non-cryptographic. Good enough to pick classes and characters uniformly,
//! nothing more is promised.

mod hw;
mod multipliers;

use multipliers::MULTIPLIERS;

pub fn entropy_source() -> &'static str {
    hw::source_name()
}

/// Uniform random source used by the generator.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    ///
    /// Rejects the low `2^64 mod bound` outputs so every index is equally
    /// likely.
    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        let bound = bound as u64;
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return (r % bound) as usize;
            }
        }
    }
}

/// Cycle-counter seeded mixer with a SplitMix64 output finalizer.
pub struct Rand {
    state: u64,
}

impl Rand {
    #[inline]
    pub fn new() -> Self {
        Rand {
            state: hw::entropy(),
        }
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Rand {
    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        let state = self.state;
        let ent = hw::entropy();

        // Mix entropy into multiplier selection
        let mixed = state ^ ent;
        let idx = (mixed ^ (mixed >> 32)) as usize % MULTIPLIERS.len();

        // State transition: rotate, multiply by an odd multiplier, XOR entropy
        let new_state = state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;
        self.state = new_state;

        // SplitMix64 output finalizer
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        unsafe { std::ptr::write_volatile(&mut self.state, 0) }
    }
}
