//! JSON configuration of a set of named random variables
//!
//! ```json
//! {
//!   "seed": 12345,
//!   "variables": {
//!     "arrival": "exponential(0.5)",
//!     "service": { "Uniform": { "min": 1.0, "max": 2.0 } }
//!   }
//! }
//! ```
//!
//! Each variable is either an expression in parser syntax or a structured
//! [`Distribution`] record. Building reseeds the active generator when a
//! seed is given, then binds every variable to it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RandomVarError;
use crate::rng::{GeneratorContext, RandNum};
use crate::variables::{Distribution, RandomVar};

/// How a single variable is described in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarSpec {
    /// `"normal(0, 1)"`
    Expr(String),
    /// `{"Normal": {"mean": 0.0, "std_dev": 1.0}}`
    Record(Distribution),
}

/// Seed plus named variables
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariateConfig {
    /// Reseeds the active generator before building, if present
    #[serde(default)]
    pub seed: Option<RandNum>,

    /// Variables by name
    #[serde(default)]
    pub variables: BTreeMap<String, VarSpec>,
}

impl VariateConfig {
    /// Decode a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, RandomVarError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RandomVarError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RandomVarError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Encode back to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, RandomVarError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reseed (if configured) and bind every variable to the active generator
    ///
    /// Stops at the first variable that fails to build.
    pub fn build(
        &self,
        ctx: &mut GeneratorContext,
    ) -> Result<BTreeMap<String, RandomVar>, RandomVarError> {
        if let Some(seed) = self.seed {
            ctx.init(seed)?;
        }
        self.variables
            .iter()
            .map(|(name, spec)| {
                let var = match spec {
                    VarSpec::Expr(expr) => ctx.parse(expr)?,
                    VarSpec::Record(dist) => ctx.bind(dist.clone())?,
                };
                Ok::<_, RandomVarError>((name.clone(), var))
            })
            .collect()
    }
}
