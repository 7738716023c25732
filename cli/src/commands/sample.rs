//! Sample command implementation

use tracing::info;

use super::context;
use crate::Result;

/// Run the sample command
pub fn run(expr: &str, count: usize, seed: Option<i64>) -> Result<()> {
    let ctx = context(seed)?;
    let mut var = ctx.parse(expr)?;
    info!(dist = %var, count, "sampling");

    for _ in 0..count {
        println!("{}", var.get());
    }
    Ok(())
}
