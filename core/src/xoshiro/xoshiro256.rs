//! 64-bit generator with 256-bit state
//!
//! Reference: <http://prng.di.unimi.it/xoshiro256plusplus.c>

use log::trace;

use crate::seed::{expand_seed, ClockSeed, SeedSource};
use crate::uniform::{RawGenerator, RngError};

/// xoshiro256++: 64-bit all-purpose generator with 256-bit state
///
/// The uniform layer sees full 64-bit words: `next_f64` gets 52 bits of
/// entropy, `fill_bytes` consumes 8 bytes per transition, and `next_i32`
/// keeps only the low 32 bits.
///
/// # Example
/// ```
/// use scrambled_linear::{RawGenerator, Xoshiro256PlusPlus};
///
/// let mut rng = Xoshiro256PlusPlus::new(0);
/// assert_eq!(rng.next_raw(), 0x5317_5D61_490B_23DF);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Create a generator from a seed
    ///
    /// splitmix64 expands the seed into the four state words.
    pub fn new(seed: i32) -> Self {
        trace!("seeding xoshiro256++ from {}", seed);
        Self {
            s: expand_seed(seed),
        }
    }

    /// Create a generator seeded from `source`
    pub fn from_seed_source<S: SeedSource + ?Sized>(source: &mut S) -> Self {
        Self::new(source.next_seed())
    }

    /// Create a generator seeded from the system clock
    pub fn from_clock() -> Self {
        Self::from_seed_source(&mut ClockSeed)
    }

    /// Create a generator with an explicit state
    ///
    /// # Errors
    /// `RngError::ZeroState` if every word is zero
    pub fn from_state(state: [u64; 4]) -> Result<Self, RngError> {
        if state == [0; 4] {
            return Err(RngError::ZeroState);
        }
        Ok(Self { s: state })
    }

    /// Current state words
    pub fn state(&self) -> [u64; 4] {
        self.s
    }
}

impl Default for Xoshiro256PlusPlus {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl RawGenerator for Xoshiro256PlusPlus {
    type Word = u64;

    #[inline]
    fn next_raw(&mut self) -> u64 {
        let result = self.s[0]
            .wrapping_add(self.s[3])
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state_is_splitmix_output() {
        let rng = Xoshiro256PlusPlus::new(0);
        assert_eq!(
            rng.state(),
            [
                0xE220_A839_7B1D_CDAF,
                0x6E78_9E6A_A1B9_65F4,
                0x06C4_5D18_8009_454F,
                0xF88B_B8A8_724C_81EC,
            ]
        );
    }

    #[test]
    fn test_first_word_seed_zero() {
        // rotl(s0 + s3, 23) + s0 on the seeded state above
        let mut rng = Xoshiro256PlusPlus::new(0);
        assert_eq!(rng.next_raw(), 0x5317_5D61_490B_23DF);
    }

    #[test]
    fn test_zero_state_rejected() {
        assert_eq!(
            Xoshiro256PlusPlus::from_state([0; 4]),
            Err(RngError::ZeroState)
        );
    }

    #[test]
    fn test_seed_source_is_consulted_once() {
        let mut calls = 0;
        let rng = Xoshiro256PlusPlus::from_seed_source(&mut || {
            calls += 1;
            0
        });
        assert_eq!(calls, 1);
        assert_eq!(rng, Xoshiro256PlusPlus::new(0));
    }
}
