//! xoshiro generators
//!
//! Each generator owns its state words exclusively and mutates them in place
//! on every [`RawGenerator::next_raw`](crate::RawGenerator::next_raw) call.
//! Instances are not synchronized; use one per thread.

mod xoshiro128;
mod xoshiro256;

pub use xoshiro128::{Xoshiro128PlusPlus, Xoshiro128StarStar};
pub use xoshiro256::Xoshiro256PlusPlus;
