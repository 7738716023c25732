//! Simulation Random Variates - Rust Core
//!
//! Seedable pseudo-random variates for driving the timing and workload of a
//! discrete-event simulation.
//!
//! # Architecture
//!
//! - **rng**: Lehmer generator, seed table, active-generator context
//! - **variables**: Distribution records and generator-bound random variables
//! - **parser**: `name(p1, p2, ...)` expressions and the name registry
//! - **config**: JSON configuration of seeded variable sets
//!
//! # Critical Invariants
//!
//! 1. Generator state is always in [1, M-1]; zero seeds are rejected
//! 2. All randomness is deterministic (seeded generators, no ambient entropy)
//! 3. Variables share, never own, the generator they were bound to
//!
//! # Example
//!
//! ```
//! use sim_randvar::rng::GeneratorContext;
//!
//! let ctx = GeneratorContext::with_seed(12345).unwrap();
//! let mut service = ctx.parse("exponential(2)").unwrap();
//!
//! let t = service.get();
//! assert!(t >= 0.0);
//! assert_eq!(service.maximum(), None);
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod parser;
pub mod rng;
pub mod variables;

// Re-exports for convenience
pub use config::{VarSpec, VariateConfig};
pub use error::RandomVarError;
pub use parser::{parse_var, tokenize, VarBuilder, VarRegistry};
pub use rng::{new_handle, GenHandle, GeneratorContext, RandNum, RandomGen};
pub use variables::{Distribution, RandomVar, RandomVariable, POISSON_CUTOFF};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn sim_randvar(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyRandomVar>()?;
    Ok(())
}
