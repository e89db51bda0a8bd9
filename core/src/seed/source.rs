//! Seed sources
//!
//! The no-argument constructors need a seed from somewhere. Instead of
//! reading the clock directly, they take a [`SeedSource`], so tests can
//! supply a fixed one.

use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

/// 100 ns ticks between 0001-01-01 and 1970-01-01 (UTC)
const TICKS_AT_UNIX_EPOCH: u64 = 621_355_968_000_000_000;

/// Anything that can hand out an `i32` seed
pub trait SeedSource {
    fn next_seed(&mut self) -> i32;
}

/// Wall-clock seed source
///
/// Reads the system clock as 100 ns ticks since 0001-01-01 UTC and reduces
/// it modulo `i32::MAX`. The result is never negative. A clock set before
/// 1970 counts from the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockSeed;

impl ClockSeed {
    fn ticks_now() -> u64 {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let ticks = since_epoch.as_nanos() / 100;
        TICKS_AT_UNIX_EPOCH.wrapping_add(ticks as u64)
    }
}

impl SeedSource for ClockSeed {
    fn next_seed(&mut self) -> i32 {
        let seed = (Self::ticks_now() % i32::MAX as u64) as i32;
        debug!("derived clock seed {}", seed);
        seed
    }
}

/// Always returns the same seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub i32);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> i32 {
        self.0
    }
}

impl<F: FnMut() -> i32> SeedSource for F {
    fn next_seed(&mut self) -> i32 {
        self()
    }
}
