//! PyO3 wrapper for AnyGenerator

use std::borrow::Cow;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{Algorithm, AnyGenerator, GeneratorConfig};
use crate::uniform::RngError;

fn value_error(e: RngError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper for a seeded generator
///
/// # Example (from Python)
///
/// ```python
/// from scrambled_linear import Generator
///
/// rng = Generator("xoshiro256++", seed=12345)
/// roll = rng.next_between(1, 7)
/// noise = rng.next_bytes(16)
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: AnyGenerator,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator
    ///
    /// # Errors
    ///
    /// Raises ValueError for an unknown algorithm name
    #[new]
    #[pyo3(signature = (algorithm, seed=None))]
    fn new(algorithm: &str, seed: Option<i32>) -> PyResult<Self> {
        let algorithm: Algorithm = algorithm
            .parse()
            .map_err(|e: crate::config::ConfigError| PyValueError::new_err(e.to_string()))?;
        let inner = GeneratorConfig::new(algorithm, seed).build();
        Ok(PyGenerator { inner })
    }

    #[getter]
    fn algorithm(&self) -> &'static str {
        self.inner.algorithm().name()
    }

    /// Signed 32-bit integer
    fn next(&mut self) -> i32 {
        self.inner.next_i32()
    }

    /// Integer in [0, upper)
    fn next_below(&mut self, upper: i32) -> PyResult<i32> {
        self.inner.next_below(upper).map_err(value_error)
    }

    /// Integer in [lower, upper)
    fn next_between(&mut self, lower: i32, upper: i32) -> PyResult<i32> {
        self.inner.next_between(lower, upper).map_err(value_error)
    }

    /// Float in [0.0, 1.0)
    fn next_double(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// `length` random bytes
    fn next_bytes(&mut self, length: usize) -> Cow<'static, [u8]> {
        let mut buffer = vec![0u8; length];
        self.inner.fill_bytes(&mut buffer);
        Cow::Owned(buffer)
    }

    fn __repr__(&self) -> String {
        format!("Generator({:?})", self.inner.algorithm().name())
    }
}
