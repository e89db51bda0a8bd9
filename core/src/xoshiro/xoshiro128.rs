//! 32-bit generators with 128-bit state
//!
//! xoshiro128** and xoshiro128++ share the same linear state update and differ
//! only in how the output word is scrambled:
//!
//! - `**`: `rotl(s1 * 5, 7) * 9`
//! - `++`: `rotl(s0 + s3, 7) + s0`
//!
//! Both outputs are computed from the state *before* the update.
//!
//! References: <http://prng.di.unimi.it/xoshiro128starstar.c>,
//! <http://prng.di.unimi.it/xoshiro128plusplus.c>

use log::trace;

use crate::seed::{expand_seed, ClockSeed, SeedSource};
use crate::uniform::{RawGenerator, RngError};

/// Linear engine shared by both 128-bit variants
#[inline]
fn advance(s: &mut [u32; 4]) {
    let t = s[1] << 9;

    s[2] ^= s[0];
    s[3] ^= s[1];
    s[1] ^= s[2];
    s[0] ^= s[3];

    s[2] ^= t;
    s[3] = s[3].rotate_left(11);
}

fn checked_state(state: [u32; 4]) -> Result<[u32; 4], RngError> {
    if state == [0; 4] {
        return Err(RngError::ZeroState);
    }
    Ok(state)
}

/// xoshiro128**: 32-bit all-purpose generator with 128-bit state
///
/// # Example
/// ```
/// use scrambled_linear::{RawGenerator, UniformRandom, Xoshiro128StarStar};
///
/// let mut rng = Xoshiro128StarStar::new(0);
/// assert_eq!(rng.next_raw(), 0xCB75_F2B4);
/// assert!(rng.next_below(10).unwrap() < 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro128StarStar {
    s: [u32; 4],
}

impl Xoshiro128StarStar {
    /// Create a generator from a seed
    ///
    /// splitmix64 expands the seed into four words (low halves kept).
    pub fn new(seed: i32) -> Self {
        trace!("seeding xoshiro128** from {}", seed);
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
    /// `RngError::ZeroState` if every word is zero (the generator would only
    /// ever output zero)
    pub fn from_state(state: [u32; 4]) -> Result<Self, RngError> {
        Ok(Self {
            s: checked_state(state)?,
        })
    }

    /// Current state words
    pub fn state(&self) -> [u32; 4] {
        self.s
    }
}

impl Default for Xoshiro128StarStar {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl RawGenerator for Xoshiro128StarStar {
    type Word = u32;

    #[inline]
    fn next_raw(&mut self) -> u32 {
        let result = self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        advance(&mut self.s);
        result
    }
}

/// xoshiro128++: 32-bit all-purpose generator with 128-bit state
///
/// # Example
/// ```
/// use scrambled_linear::{RawGenerator, Xoshiro128PlusPlus};
///
/// let mut rng = Xoshiro128PlusPlus::from_state([1, 2, 3, 4]).unwrap();
/// assert_eq!(rng.next_raw(), 641);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro128PlusPlus {
    s: [u32; 4],
}

impl Xoshiro128PlusPlus {
    /// Create a generator from a seed
    ///
    /// splitmix64 expands the seed into four words (low halves kept).
    pub fn new(seed: i32) -> Self {
        trace!("seeding xoshiro128++ from {}", seed);
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
    pub fn from_state(state: [u32; 4]) -> Result<Self, RngError> {
        Ok(Self {
            s: checked_state(state)?,
        })
    }

    /// Current state words
    pub fn state(&self) -> [u32; 4] {
        self.s
    }
}

impl Default for Xoshiro128PlusPlus {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl RawGenerator for Xoshiro128PlusPlus {
    type Word = u32;

    #[inline]
    fn next_raw(&mut self) -> u32 {
        let result = self.s[0]
            .wrapping_add(self.s[3])
            .rotate_left(7)
            .wrapping_add(self.s[0]);
        advance(&mut self.s);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state_matches_splitmix_low_halves() {
        let rng = Xoshiro128StarStar::new(0);
        assert_eq!(
            rng.state(),
            [0x7B1D_CDAF, 0xA1B9_65F4, 0x8009_454F, 0x724C_81EC]
        );
        assert_eq!(Xoshiro128PlusPlus::new(0).state(), rng.state());
    }

    #[test]
    fn test_variants_share_state_update() {
        let mut ss = Xoshiro128StarStar::new(99);
        let mut pp = Xoshiro128PlusPlus::new(99);
        for _ in 0..50 {
            ss.next_raw();
            pp.next_raw();
            assert_eq!(ss.state(), pp.state());
        }
    }

    #[test]
    fn test_zero_state_rejected() {
        assert_eq!(
            Xoshiro128StarStar::from_state([0; 4]),
            Err(RngError::ZeroState)
        );
        assert_eq!(
            Xoshiro128PlusPlus::from_state([0; 4]),
            Err(RngError::ZeroState)
        );
        assert!(Xoshiro128StarStar::from_state([0, 0, 0, 1]).is_ok());
    }

    #[test]
    fn test_state_advances() {
        let mut rng = Xoshiro128PlusPlus::new(5);
        let before = rng.state();
        rng.next_raw();
        assert_ne!(before, rng.state());
    }
}
