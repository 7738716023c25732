//! Distribution registry
//!
//! Maps the names accepted by the parser to "construct from parameter list"
//! functions. The built-in table covers every kind of Distribution plus a few
//! aliases; callers can register further names that map onto any builder.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use super::tokenize;
use crate::error::RandomVarError;
use crate::rng::GenHandle;
use crate::variables::{Distribution, RandomVar};

/// Builds a parameter record from the textual parameters of `name(...)`
///
/// The first argument is the name as written, for error messages.
pub type VarBuilder = fn(&str, &[String]) -> Result<Distribution, RandomVarError>;

/// Name → builder table used by the parser
#[derive(Clone)]
pub struct VarRegistry {
    builders: HashMap<String, VarBuilder>,
}

impl VarRegistry {
    /// Registry without any names
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Registry with the built-in names and aliases
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("constant", Distribution::constant_from_params);
        registry.register("delta", Distribution::constant_from_params);
        registry.register("uniform", Distribution::uniform_from_params);
        registry.register("exponential", Distribution::exponential_from_params);
        registry.register("exp", Distribution::exponential_from_params);
        registry.register("weibull", Distribution::weibull_from_params);
        registry.register("pareto", Distribution::pareto_from_params);
        registry.register("normal", Distribution::normal_from_params);
        registry.register("gauss", Distribution::normal_from_params);
        registry.register("poisson", Distribution::poisson_from_params);
        registry.register("deterministic", Distribution::deterministic_from_params);
        registry.register("det", Distribution::deterministic_from_params);
        registry
    }

    /// Shared instance of the built-in registry
    pub fn builtin() -> &'static VarRegistry {
        static BUILTIN: OnceLock<VarRegistry> = OnceLock::new();
        BUILTIN.get_or_init(VarRegistry::with_builtins)
    }

    /// Register `name`, returning the builder it replaces (if any)
    pub fn register(&mut self, name: impl Into<String>, builder: VarBuilder) -> Option<VarBuilder> {
        self.builders.insert(name.into(), builder)
    }

    /// True if `name` is registered (case-sensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parse `expr` into a parameter record
    ///
    /// # Errors
    /// - `WrongDistribution` if the syntax is broken or the name is unknown
    /// - `WrongArity` / `MalformedLiteral` from the variant's builder
    /// - any error of the builder itself (e.g. sequence file errors)
    pub fn build(&self, expr: &str) -> Result<Distribution, RandomVarError> {
        let (name, params) = tokenize(expr)?;
        let builder = self
            .builders
            .get(&name)
            .ok_or_else(|| RandomVarError::WrongDistribution {
                name: name.clone(),
                reason: "unknown distribution".to_string(),
            })?;
        let dist = builder(&name, &params)?;
        debug!(expr, dist = %dist, "parsed random variable");
        Ok(dist)
    }

    /// Parse `expr` and bind the result to `gen`
    pub fn parse(&self, expr: &str, gen: GenHandle) -> Result<RandomVar, RandomVarError> {
        RandomVar::new(gen, self.build(expr)?)
    }
}

impl Default for VarRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for VarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VarRegistry")
            .field("names", &self.names())
            .finish()
    }
}
