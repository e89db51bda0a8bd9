//! `rand_core` integration
//!
//! Lets the generators drive anything written against `rand_core::RngCore`.
//! Byte output goes through [`UniformRandom::fill_bytes`], so it matches the
//! native API byte for byte.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::uniform::{RawGenerator, UniformRandom};
use crate::xoshiro::{Xoshiro128PlusPlus, Xoshiro128StarStar, Xoshiro256PlusPlus};

fn words_u32(seed: &[u8; 16]) -> [u32; 4] {
    std::array::from_fn(|i| {
        u32::from_le_bytes([seed[4 * i], seed[4 * i + 1], seed[4 * i + 2], seed[4 * i + 3]])
    })
}

fn words_u64(seed: &[u8; 32]) -> [u64; 4] {
    std::array::from_fn(|i| {
        let mut word = [0u8; 8];
        word.copy_from_slice(&seed[8 * i..8 * i + 8]);
        u64::from_le_bytes(word)
    })
}

impl RngCore for Xoshiro128StarStar {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        UniformRandom::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        UniformRandom::fill_bytes(self, dest);
        Ok(())
    }
}

impl RngCore for Xoshiro128PlusPlus {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        UniformRandom::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        UniformRandom::fill_bytes(self, dest);
        Ok(())
    }
}

impl RngCore for Xoshiro256PlusPlus {
    /// Low half of one 64-bit word, as with `next_i32`
    fn next_u32(&mut self) -> u32 {
        self.next_raw() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        UniformRandom::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        UniformRandom::fill_bytes(self, dest);
        Ok(())
    }
}

// An all-zero seed would give a stuck generator; fall back to seed 0 instead.

impl SeedableRng for Xoshiro128StarStar {
    type Seed = [u8; 16];

    fn from_seed(seed: [u8; 16]) -> Self {
        Self::from_state(words_u32(&seed)).unwrap_or_else(|_| Self::new(0))
    }
}

impl SeedableRng for Xoshiro128PlusPlus {
    type Seed = [u8; 16];

    fn from_seed(seed: [u8; 16]) -> Self {
        Self::from_state(words_u32(&seed)).unwrap_or_else(|_| Self::new(0))
    }
}

impl SeedableRng for Xoshiro256PlusPlus {
    type Seed = [u8; 32];

    fn from_seed(seed: [u8; 32]) -> Self {
        Self::from_state(words_u64(&seed)).unwrap_or_else(|_| Self::new(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_reads_little_endian_words() {
        let mut seed = [0u8; 16];
        seed[0] = 1;
        seed[4] = 2;
        seed[8] = 3;
        seed[12] = 4;
        let rng = Xoshiro128StarStar::from_seed(seed);
        assert_eq!(rng.state(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_seed_falls_back() {
        assert_eq!(Xoshiro256PlusPlus::from_seed([0; 32]), Xoshiro256PlusPlus::new(0));
        assert_eq!(Xoshiro128PlusPlus::from_seed([0; 16]), Xoshiro128PlusPlus::new(0));
    }

    #[test]
    fn test_next_u64_low_word_first() {
        let mut a = Xoshiro128PlusPlus::new(11);
        let mut b = Xoshiro128PlusPlus::new(11);
        let lo = u64::from(b.next_raw());
        let hi = u64::from(b.next_raw());
        assert_eq!(a.next_u64(), (hi << 32) | lo);
    }
}
