//! Scrambled Linear - deterministic xoshiro generators
//!
//! Small, fast, non-cryptographic pseudo-random number generators from the
//! xoshiro family, seeded from a single `i32` via splitmix64.
//!
//! # Architecture
//!
//! - **seed**: splitmix64 seed expansion and seed sources (clock, fixed)
//! - **xoshiro**: the generator cores (xoshiro128**, xoshiro128++, xoshiro256++)
//! - **uniform**: integers, bounded integers, doubles and bytes derived from
//!   raw words, shared by every generator
//! - **config**: runtime algorithm selection
//!
//! # Critical Invariants
//!
//! 1. Same seed → same stream, on every platform
//! 2. Rejected arguments never advance the state
//! 3. Not cryptographically secure; not thread-safe without external locking
//!
//! # Example
//! ```
//! use scrambled_linear::{UniformRandom, Xoshiro256PlusPlus};
//!
//! let mut a = Xoshiro256PlusPlus::new(42);
//! let mut b = Xoshiro256PlusPlus::new(42);
//! assert_eq!(a.next_i32(), b.next_i32());
//!
//! let mut buf = [0u8; 12];
//! a.fill_bytes(&mut buf);
//! ```

// Module declarations
pub mod config;
pub mod seed;
pub mod uniform;
pub mod word;
pub mod xoshiro;

#[cfg(feature = "rand_core")]
mod rand_compat;

// Re-exports for convenience
pub use config::{Algorithm, AnyGenerator, ConfigError, GeneratorConfig};
pub use seed::{expand_seed, ClockSeed, FixedSeed, SeedSource, SplitMix64};
pub use uniform::{RawGenerator, RngError, UniformRandom};
pub use word::StateWord;
pub use xoshiro::{Xoshiro128PlusPlus, Xoshiro128StarStar, Xoshiro256PlusPlus};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn scrambled_linear(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    Ok(())
}
