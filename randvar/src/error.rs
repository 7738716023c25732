//! Error taxonomy for generators, random variables and the parser
//!
//! Four families of failure exist:
//! 1. Generator misconfiguration (bad seed) - fatal at construction
//! 2. Bound not computable - recoverable, normally surfaced as `Option::None`
//! 3. Sequence file I/O - fatal at construction, open/close distinguished
//! 4. Parse failures - unknown name, wrong arity, malformed literal
//!
//! Every variant names the variable kind (or distribution name) it came from.

use thiserror::Error;

use crate::rng::RandNum;

/// Errors raised by the random variable library
#[derive(Debug, Error, PartialEq)]
pub enum RandomVarError {
    #[error("RandomGen: invalid seed {seed} (must lie in [1, M-1])")]
    InvalidSeed { seed: RandNum },

    #[error("{var}: maximum value cannot be computed for this variable type")]
    MaxNotComputable { var: String },

    #[error("{var}: cannot open file '{path}': {reason}")]
    FileOpen {
        var: String,
        path: String,
        reason: String,
    },

    #[error("{var}: error while reading or closing file '{path}': {reason}")]
    FileClose {
        var: String,
        path: String,
        reason: String,
    },

    #[error("{var}: malformed value '{literal}' in '{path}' at line {line}")]
    MalformedValue {
        var: String,
        path: String,
        line: usize,
        literal: String,
    },

    #[error("{var}: sequence of values is empty")]
    EmptySequence { var: String },

    #[error("{var}: invalid parameter: {reason}")]
    InvalidParameter { var: String, reason: String },

    #[error("wrong distribution '{name}': {reason}")]
    WrongDistribution { name: String, reason: String },

    #[error("wrong distribution '{name}': expected {expected} parameter(s), found {found}")]
    WrongArity {
        name: String,
        expected: String,
        found: usize,
    },

    #[error("wrong distribution '{name}': '{literal}' is not a number")]
    MalformedLiteral { name: String, literal: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl RandomVarError {
    /// True for the parse/grammar family of errors
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            RandomVarError::WrongDistribution { .. }
                | RandomVarError::WrongArity { .. }
                | RandomVarError::MalformedLiteral { .. }
        )
    }

    /// True for failures to load a deterministic sequence from disk
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            RandomVarError::FileOpen { .. }
                | RandomVarError::FileClose { .. }
                | RandomVarError::MalformedValue { .. }
        )
    }

    pub(crate) fn invalid(var: &str, reason: impl Into<String>) -> Self {
        RandomVarError::InvalidParameter {
            var: var.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RandomVarError {
    fn from(err: serde_json::Error) -> Self {
        RandomVarError::Config(err.to_string())
    }
}
