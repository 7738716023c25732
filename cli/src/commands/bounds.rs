//! Bounds command implementation

use sim_randvar::GeneratorContext;

use super::format_bound;
use crate::Result;

/// Run the bounds command
pub fn run(expr: &str) -> Result<()> {
    let var = GeneratorContext::new().parse(expr)?;
    println!("distribution: {}", var);
    println!("minimum: {}", format_bound(var.minimum()));
    println!("maximum: {}", format_bound(var.maximum()));
    Ok(())
}
