//! PyO3 wrapper for RandomVar

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::RandomVarError;
use crate::rng::{GeneratorContext, RandNum};
use crate::variables::RandomVar;

fn to_py_err(err: RandomVarError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a parsed random variable
///
/// # Example (from Python)
///
/// ```python
/// from sim_randvar import RandomVar
///
/// service = RandomVar.parse("exponential(2)", seed=12345)
/// times = service.sample(1000)
/// print(service.minimum(), service.maximum())  # 0.0 None
/// ```
#[pyclass(name = "RandomVar", unsendable)]
pub struct PyRandomVar {
    inner: RandomVar,
}

#[pymethods]
impl PyRandomVar {
    /// Parse `expr` and bind it to a fresh generator
    ///
    /// # Errors
    ///
    /// Raises ValueError if the seed is invalid or the expression does not parse.
    #[staticmethod]
    #[pyo3(signature = (expr, seed = None))]
    fn parse(expr: &str, seed: Option<RandNum>) -> PyResult<Self> {
        let ctx = match seed {
            Some(seed) => GeneratorContext::with_seed(seed).map_err(to_py_err)?,
            None => GeneratorContext::new(),
        };
        let inner = ctx.parse(expr).map_err(to_py_err)?;
        Ok(PyRandomVar { inner })
    }

    /// Draw one variate
    fn get(&mut self) -> f64 {
        self.inner.get()
    }

    /// Draw `n` variates
    fn sample(&mut self, n: usize) -> Vec<f64> {
        self.inner.sample_n(n)
    }

    /// Lower bound, or None when not computable
    fn minimum(&self) -> Option<f64> {
        self.inner.minimum()
    }

    /// Upper bound, or None when not computable
    fn maximum(&self) -> Option<f64> {
        self.inner.maximum()
    }

    fn __repr__(&self) -> String {
        format!("RandomVar('{}')", self.inner)
    }
}
