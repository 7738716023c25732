//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod bounds;
pub mod config;
pub mod sample;
pub mod stats;

use sim_randvar::GeneratorContext;

use crate::Result;

/// Generator context seeded from the command line, or the library default
pub(crate) fn context(seed: Option<i64>) -> Result<GeneratorContext> {
    match seed {
        Some(seed) => Ok(GeneratorContext::with_seed(seed)?),
        None => Ok(GeneratorContext::new()),
    }
}

pub(crate) fn format_bound(bound: Option<f64>) -> String {
    bound.map_or_else(|| "unbounded".to_string(), |b| b.to_string())
}
