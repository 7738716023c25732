//! Config command implementation
//!
//! Builds every variable of a JSON configuration and samples each of them.

use sim_randvar::{GeneratorContext, VariateConfig};
use tracing::info;

use super::format_bound;
use crate::Result;

/// Run the config command
pub fn run(file: &str, count: usize) -> Result<()> {
    let config = VariateConfig::from_file(file)?;
    let mut ctx = GeneratorContext::new();
    let mut vars = config.build(&mut ctx)?;
    info!(file, variables = vars.len(), "built configuration");

    for (name, var) in vars.iter_mut() {
        let samples = var
            .sample_n(count)
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{} = {} [{}, {}]: {}",
            name,
            var,
            format_bound(var.minimum()),
            format_bound(var.maximum()),
            samples
        );
    }
    Ok(())
}
