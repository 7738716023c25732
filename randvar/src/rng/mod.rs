//! Deterministic random number generation
//!
//! Uses the Lehmer "minimal standard" generator with Schrage's method.
//! CRITICAL: All randomness drawn by variables MUST come from a `RandomGen`
//! reached through a `GenHandle`, so runs are reproducible from their seeds.

mod context;
mod lcg;
mod seeds;

pub use context::{new_handle, GenHandle, GeneratorContext};
pub use lcg::{RandNum, RandomGen, A, DEFAULT_SEED, M, Q, R};
pub use seeds::{seed, seed_table, MAX_SEEDS, SEED_SPACING};
