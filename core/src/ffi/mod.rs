//! Python bindings
//!
//! Exposes a single `Generator` class; the algorithm is picked by name.

pub mod generator;
