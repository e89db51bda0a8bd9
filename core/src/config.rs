//! Generator configuration
//!
//! Selects an algorithm and an optional seed, usually from JSON:
//!
//! ```json
//! { "algorithm": "xoshiro256++", "seed": 12345 }
//! ```
//!
//! A missing seed means "seed from the clock".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::seed::{ClockSeed, SeedSource};
use crate::uniform::{RawGenerator, RngError, UniformRandom};
use crate::xoshiro::{Xoshiro128PlusPlus, Xoshiro128StarStar, Xoshiro256PlusPlus};

/// Errors raised while reading a configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Failed to parse JSON: {0}")]
    Parse(String),
}

/// Available generator algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "xoshiro128**")]
    Xoshiro128StarStar,

    #[serde(rename = "xoshiro128++")]
    Xoshiro128PlusPlus,

    #[serde(rename = "xoshiro256++")]
    Xoshiro256PlusPlus,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Xoshiro128StarStar,
        Algorithm::Xoshiro128PlusPlus,
        Algorithm::Xoshiro256PlusPlus,
    ];

    /// Canonical name, e.g. `"xoshiro128**"`
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Xoshiro128StarStar => "xoshiro128**",
            Algorithm::Xoshiro128PlusPlus => "xoshiro128++",
            Algorithm::Xoshiro256PlusPlus => "xoshiro256++",
        }
    }

    /// Bytes produced per state transition
    pub fn word_bytes(self) -> usize {
        match self {
            Algorithm::Xoshiro128StarStar | Algorithm::Xoshiro128PlusPlus => 4,
            Algorithm::Xoshiro256PlusPlus => 8,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

/// Which generator to build, and from what seed
///
/// # Example
/// ```
/// use scrambled_linear::{Algorithm, GeneratorConfig};
///
/// let config = GeneratorConfig::from_json(r#"{"algorithm": "xoshiro128++", "seed": 7}"#).unwrap();
/// assert_eq!(config.algorithm, Algorithm::Xoshiro128PlusPlus);
///
/// let mut rng = config.build();
/// let value = rng.next_below(100).unwrap();
/// assert!((0..100).contains(&value));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub algorithm: Algorithm,

    /// Explicit seed; `None` seeds from the clock
    #[serde(default)]
    pub seed: Option<i32>,
}

impl GeneratorConfig {
    pub fn new(algorithm: Algorithm, seed: Option<i32>) -> Self {
        Self { algorithm, seed }
    }

    /// Parse a configuration from JSON
    ///
    /// # Errors
    /// `ConfigError::Parse` on malformed JSON, unknown algorithm names or
    /// seeds outside the `i32` range
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build the configured generator
    pub fn build(&self) -> AnyGenerator {
        self.build_with(&mut ClockSeed)
    }

    /// Build the configured generator, drawing a missing seed from `source`
    pub fn build_with<S: SeedSource + ?Sized>(&self, source: &mut S) -> AnyGenerator {
        let seed = self.seed.unwrap_or_else(|| source.next_seed());
        AnyGenerator::new(self.algorithm, seed)
    }
}

/// A generator whose algorithm is chosen at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGenerator {
    Xoshiro128StarStar(Xoshiro128StarStar),
    Xoshiro128PlusPlus(Xoshiro128PlusPlus),
    Xoshiro256PlusPlus(Xoshiro256PlusPlus),
}

macro_rules! dispatch {
    ($self:expr, $rng:ident => $body:expr) => {
        match $self {
            AnyGenerator::Xoshiro128StarStar($rng) => $body,
            AnyGenerator::Xoshiro128PlusPlus($rng) => $body,
            AnyGenerator::Xoshiro256PlusPlus($rng) => $body,
        }
    };
}

impl AnyGenerator {
    pub fn new(algorithm: Algorithm, seed: i32) -> Self {
        match algorithm {
            Algorithm::Xoshiro128StarStar => Xoshiro128StarStar::new(seed).into(),
            Algorithm::Xoshiro128PlusPlus => Xoshiro128PlusPlus::new(seed).into(),
            Algorithm::Xoshiro256PlusPlus => Xoshiro256PlusPlus::new(seed).into(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Xoshiro128StarStar(_) => Algorithm::Xoshiro128StarStar,
            Self::Xoshiro128PlusPlus(_) => Algorithm::Xoshiro128PlusPlus,
            Self::Xoshiro256PlusPlus(_) => Algorithm::Xoshiro256PlusPlus,
        }
    }

    /// Raw output word widened to `u64`
    pub fn next_raw_u64(&mut self) -> u64 {
        dispatch!(self, rng => u64::from(rng.next_raw()))
    }

    pub fn next_i32(&mut self) -> i32 {
        dispatch!(self, rng => rng.next_i32())
    }

    pub fn next_f64(&mut self) -> f64 {
        dispatch!(self, rng => rng.next_f64())
    }

    pub fn next_below(&mut self, upper: i32) -> Result<i32, RngError> {
        dispatch!(self, rng => rng.next_below(upper))
    }

    pub fn next_between(&mut self, lower: i32, upper: i32) -> Result<i32, RngError> {
        dispatch!(self, rng => rng.next_between(lower, upper))
    }

    pub fn fill_bytes(&mut self, buffer: &mut [u8]) {
        dispatch!(self, rng => rng.fill_bytes(buffer))
    }
}

impl From<Xoshiro128StarStar> for AnyGenerator {
    fn from(rng: Xoshiro128StarStar) -> Self {
        Self::Xoshiro128StarStar(rng)
    }
}

impl From<Xoshiro128PlusPlus> for AnyGenerator {
    fn from(rng: Xoshiro128PlusPlus) -> Self {
        Self::Xoshiro128PlusPlus(rng)
    }
}

impl From<Xoshiro256PlusPlus> for AnyGenerator {
    fn from(rng: Xoshiro256PlusPlus) -> Self {
        Self::Xoshiro256PlusPlus(rng)
    }
}
