//! Textual construction of random variables
//!
//! Grammar (whitespace between tokens is ignored):
//!
//! ```text
//! expr   := name "(" [ param ( "," param )* ] ")"
//! name   := [A-Za-z0-9_]+           (matched case-sensitively)
//! param  := any text without "," or parentheses
//! ```
//!
//! Parameters are handed to the builder registered for `name` as trimmed
//! strings; builders decide how to interpret them (numbers, or a file path
//! for `deterministic`).
//!
//! # Example
//!
//! ```
//! use sim_randvar::rng::GeneratorContext;
//!
//! let ctx = GeneratorContext::new();
//! let var = ctx.parse("uniform(0, 10)").unwrap();
//! assert_eq!(var.minimum(), Some(0.0));
//! assert_eq!(var.maximum(), Some(10.0));
//! ```

mod registry;

pub use registry::{VarBuilder, VarRegistry};

use crate::error::RandomVarError;
use crate::rng::GenHandle;
use crate::variables::RandomVar;

/// Parse `expr` with the built-in registry and bind it to `gen`
pub fn parse_var(expr: &str, gen: GenHandle) -> Result<RandomVar, RandomVarError> {
    VarRegistry::builtin().parse(expr, gen)
}

/// Split `name(p1, p2, ...)` into the name and its trimmed parameters
pub fn tokenize(expr: &str) -> Result<(String, Vec<String>), RandomVarError> {
    let expr = expr.trim();
    let syntax = |name: &str, reason: &str| RandomVarError::WrongDistribution {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let open = expr
        .find('(')
        .ok_or_else(|| syntax(expr, "expected '(' after distribution name"))?;
    let name = expr[..open].trim();
    if name.is_empty() {
        return Err(syntax(expr, "missing distribution name"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(syntax(name, "invalid character in distribution name"));
    }

    let rest = &expr[open + 1..];
    let close = rest
        .find(')')
        .ok_or_else(|| syntax(name, "missing closing ')'"))?;
    if !rest[close + 1..].trim().is_empty() {
        return Err(syntax(name, "unexpected text after ')'"));
    }

    let body = &rest[..close];
    if body.contains('(') {
        return Err(syntax(name, "nested parentheses are not allowed"));
    }
    if body.trim().is_empty() {
        return Ok((name.to_string(), Vec::new()));
    }

    let params: Vec<String> = body.split(',').map(|p| p.trim().to_string()).collect();
    if params.iter().any(String::is_empty) {
        return Err(syntax(name, "empty parameter"));
    }
    Ok((name.to_string(), params))
}
