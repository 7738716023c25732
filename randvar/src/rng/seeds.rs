//! Table of known-good seeds
//!
//! Independent generators should start from points of the stream that are
//! far apart, otherwise their sequences overlap. The table holds
//! `MAX_SEEDS` states of the default stream spaced `SEED_SPACING` steps
//! apart, so up to `MAX_SEEDS` generators can each draw `SEED_SPACING`
//! values without ever meeting another one.

use super::lcg::{pow_mod, RandNum, A, DEFAULT_SEED, M};

/// Number of entries in the seed table
pub const MAX_SEEDS: usize = 1000;

/// Distance, in steps of the recurrence, between consecutive seeds
pub const SEED_SPACING: u64 = 2_000_000;

/// The `index`-th known-good seed, or `None` past the end of the table
///
/// # Example
/// ```
/// use sim_randvar::rng::{seed, MAX_SEEDS};
///
/// assert_eq!(seed(0), Some(1));
/// assert!(seed(MAX_SEEDS).is_none());
/// ```
pub fn seed(index: usize) -> Option<RandNum> {
    if index >= MAX_SEEDS {
        return None;
    }
    let mult = pow_mod(A as u64, index as u64 * SEED_SPACING, M as u64);
    Some((mult * DEFAULT_SEED as u64 % M as u64) as RandNum)
}

/// All `MAX_SEEDS` known-good seeds, in stream order
pub fn seed_table() -> Vec<RandNum> {
    let step = pow_mod(A as u64, SEED_SPACING, M as u64);
    let mut current = DEFAULT_SEED as u64;
    let mut table = Vec::with_capacity(MAX_SEEDS);
    for _ in 0..MAX_SEEDS {
        table.push(current as RandNum);
        current = current * step % M as u64;
    }
    table
}
