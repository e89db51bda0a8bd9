//! splitmix64 seed expansion
//!
//! Turns one `i32` seed into any number of well-mixed state words.
//!
//! # Algorithm
//!
//! The accumulator always runs at 64 bits, whatever the target width. Each
//! output adds the golden-gamma increment and then applies two
//! xor-shift-multiply rounds and a final xor-shift. 32-bit targets keep the
//! low half of each output.

use crate::word::StateWord;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

/// splitmix64 generator used only for seeding
///
/// # Example
/// ```
/// use scrambled_linear::SplitMix64;
///
/// let mut sm = SplitMix64::new(0);
/// assert_eq!(sm.next_u64(), 0xE220_A839_7B1D_CDAF);
/// ```
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    /// 64-bit accumulator
    x: u64,
}

impl SplitMix64 {
    /// Create an expander from a signed seed
    ///
    /// The seed is reinterpreted as `u32` and zero-extended, so `-1` starts
    /// the accumulator at `0xFFFF_FFFF`, not at `u64::MAX`.
    pub fn new(seed: i32) -> Self {
        Self {
            x: u64::from(seed as u32),
        }
    }

    /// Produce the next 64-bit output
    pub fn next_u64(&mut self) -> u64 {
        self.x = self.x.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.x;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
        z ^ (z >> 31)
    }
}

impl Iterator for SplitMix64 {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_u64())
    }
}

/// Expand `seed` into `N` words of width `W`
///
/// Same seed, same words. Never fails.
///
/// # Example
/// ```
/// use scrambled_linear::expand_seed;
///
/// let wide: [u64; 4] = expand_seed(0);
/// let narrow: [u32; 4] = expand_seed(0);
/// assert_eq!(wide[0] as u32, narrow[0]);
/// ```
pub fn expand_seed<W: StateWord, const N: usize>(seed: i32) -> [W; N] {
    let mut sm = SplitMix64::new(seed);
    std::array::from_fn(|_| W::from_splitmix(sm.next_u64()))
}
