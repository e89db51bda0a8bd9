//! Seeding
//!
//! A generator is keyed by a single `i32` seed. splitmix64 expands that seed
//! into the full state; a [`SeedSource`] supplies the seed when the caller
//! does not.

mod source;
mod splitmix;

pub use source::{ClockSeed, FixedSeed, SeedSource};
pub use splitmix::{expand_seed, SplitMix64};
