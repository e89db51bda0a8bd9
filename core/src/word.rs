//! State word abstraction
//!
//! The generators differ only in the width of their state words (`u32` for the
//! 128-bit variants, `u64` for the 256-bit variant). Everything the seeding and
//! uniform layers need to know about a width lives in [`StateWord`].

use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned state/output word (`u32` or `u64`)
///
/// Sealed: the derivations in [`crate::UniformRandom`] are only defined for
/// these two widths.
pub trait StateWord: Copy + Eq + fmt::Debug + sealed::Sealed {
    /// Size of one word in bytes (4 or 8)
    const BYTES: usize;

    /// The all-zero word
    const ZERO: Self;

    /// Little-endian byte image of a word
    type Bytes: AsRef<[u8]>;

    /// Narrow a splitmix64 output to this width (low bits kept)
    fn from_splitmix(z: u64) -> Self;

    /// Byte image consumed by `fill_bytes`, lowest byte first
    fn le_bytes(self) -> Self::Bytes;

    /// Low 32 bits reinterpreted as two's-complement
    fn low_i32(self) -> i32;

    /// 64-bit scratch value whose top 52 bits become a double's mantissa
    ///
    /// 32-bit words are widened into bits 63..32, so the lowest 20 mantissa
    /// bits are always zero for the 128-bit generators.
    fn mantissa_source(self) -> u64;
}

impl StateWord for u32 {
    const BYTES: usize = 4;
    const ZERO: Self = 0;
    type Bytes = [u8; 4];

    #[inline]
    fn from_splitmix(z: u64) -> Self {
        z as u32
    }

    #[inline]
    fn le_bytes(self) -> [u8; 4] {
        self.to_le_bytes()
    }

    #[inline]
    fn low_i32(self) -> i32 {
        self as i32
    }

    #[inline]
    fn mantissa_source(self) -> u64 {
        u64::from(self) << 32
    }
}

impl StateWord for u64 {
    const BYTES: usize = 8;
    const ZERO: Self = 0;
    type Bytes = [u8; 8];

    #[inline]
    fn from_splitmix(z: u64) -> Self {
        z
    }

    #[inline]
    fn le_bytes(self) -> [u8; 8] {
        self.to_le_bytes()
    }

    /// Truncates: the high 32 bits of a 64-bit word are discarded.
    #[inline]
    fn low_i32(self) -> i32 {
        self as u32 as i32
    }

    #[inline]
    fn mantissa_source(self) -> u64 {
        self
    }
}
