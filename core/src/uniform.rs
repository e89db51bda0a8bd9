//! Uniform value derivations
//!
//! Every generator exposes one primitive, [`RawGenerator::next_raw`]. The
//! caller-facing values (signed integers, bounded integers, doubles in
//! `[0, 1)`, byte buffers) are derived from raw words here, identically for
//! all variants.
//!
//! [`UniformRandom`] is implemented for every [`RawGenerator`] by a blanket
//! impl, so the derivations cannot be overridden per generator.
//!
//! # Validation
//!
//! Range arguments are checked before any state transition. A rejected call
//! leaves the generator exactly as it was.

use log::debug;
use thiserror::Error;

use crate::word::StateWord;

/// IEEE-754 bit pattern of 1.0 (biased exponent 0x3FF, empty mantissa)
const ONE_BITS: u64 = 0x3FF << 52;

/// Invalid-argument failures
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RngError {
    #[error("Upper limit cannot be less than 1 (got {upper})")]
    UpperLimitTooSmall { upper: i32 },

    #[error("Lower limit must be less than upper limit (got {lower}..{upper})")]
    EmptyRange { lower: i32, upper: i32 },

    #[error("Generator state cannot be all zeros")]
    ZeroState,
}

/// A generator core: one state transition per call
pub trait RawGenerator {
    /// Output word width
    type Word: StateWord;

    /// Advance the state once and return the scrambled output
    fn next_raw(&mut self) -> Self::Word;
}

/// Caller-facing API derived from raw words
///
/// # Example
/// ```
/// use scrambled_linear::{UniformRandom, Xoshiro128StarStar};
///
/// let mut rng = Xoshiro128StarStar::new(12345);
/// let roll = rng.next_between(1, 7).unwrap(); // [1, 7)
/// assert!((1..7).contains(&roll));
///
/// let p = rng.next_f64();
/// assert!((0.0..1.0).contains(&p));
/// ```
pub trait UniformRandom: RawGenerator {
    /// Low 32 bits of one raw word as a signed integer
    ///
    /// For 64-bit generators the high half of the word is discarded.
    fn next_i32(&mut self) -> i32 {
        self.next_raw().low_i32()
    }

    /// Uniform double in `[0, 1)`
    ///
    /// Assembles a double in `[1, 2)` from the top 52 bits of the raw word
    /// and subtracts 1.0. The largest result is `1 - 2^-52`.
    fn next_f64(&mut self) -> f64 {
        let value = self.next_raw().mantissa_source();
        f64::from_bits(ONE_BITS | (value >> 12)) - 1.0
    }

    /// Value in `[0, upper)`
    ///
    /// # Errors
    /// `RngError::UpperLimitTooSmall` if `upper < 1`
    fn next_below(&mut self, upper: i32) -> Result<i32, RngError> {
        if upper < 1 {
            debug!("rejected next_below({})", upper);
            return Err(RngError::UpperLimitTooSmall { upper });
        }
        Ok((self.next_f64() * f64::from(upper)) as i32)
    }

    /// Value in `[lower, upper)`
    ///
    /// The spread is computed in 64 bits, so the full `i32` range is allowed.
    ///
    /// # Errors
    /// `RngError::EmptyRange` if `lower >= upper`
    fn next_between(&mut self, lower: i32, upper: i32) -> Result<i32, RngError> {
        if lower >= upper {
            debug!("rejected next_between({}, {})", lower, upper);
            return Err(RngError::EmptyRange { lower, upper });
        }
        let spread = i64::from(upper) - i64::from(lower);
        let unadjusted = (self.next_f64() * spread as f64) as i64;
        Ok((unadjusted + i64::from(lower)) as i32)
    }

    /// Fill `buffer` left to right with little-endian raw word bytes
    ///
    /// Uses exactly `ceil(len / Word::BYTES)` transitions; an empty buffer
    /// uses none. Bytes left over from the last word are discarded.
    fn fill_bytes(&mut self, buffer: &mut [u8]) {
        for chunk in buffer.chunks_mut(<Self::Word as StateWord>::BYTES) {
            let bytes = self.next_raw().le_bytes();
            chunk.copy_from_slice(&bytes.as_ref()[..chunk.len()]);
        }
    }
}

impl<G: RawGenerator + ?Sized> UniformRandom for G {}
