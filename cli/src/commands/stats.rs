//! Stats command implementation
//!
//! Streams the variates through Welford's update so large counts need no
//! buffer.

use tracing::info;

use super::context;
use crate::{CliError, Result};

#[derive(Debug, Default)]
struct Summary {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Summary {
    fn push(&mut self, x: f64) {
        if self.count == 0 {
            self.min = x;
            self.max = x;
        }
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }
}

/// Run the stats command
pub fn run(expr: &str, count: usize, seed: Option<i64>) -> Result<()> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be at least 1".to_string(),
        ));
    }

    let ctx = context(seed)?;
    let mut var = ctx.parse(expr)?;
    info!(dist = %var, count, "collecting statistics");

    let mut summary = Summary::default();
    for _ in 0..count {
        summary.push(var.get());
    }

    println!("distribution: {}", var);
    println!("samples:      {}", summary.count);
    println!("mean:         {}", summary.mean);
    println!("variance:     {}", summary.variance());
    println!("observed min: {}", summary.min);
    println!("observed max: {}", summary.max);
    Ok(())
}
