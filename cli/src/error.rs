//! CLI error type

use sim_randvar::RandomVarError;
use thiserror::Error;

/// Errors reported by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    RandomVar(#[from] RandomVarError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
