//! Transforms from uniform fractions to variates
//!
//! One function per distribution kind. Every function draws its uniform
//! fractions from the generator it is handed, in (0, 1) so logarithms and
//! negative powers stay finite.

use std::f64::consts::PI;

use tracing::warn;

use crate::rng::RandomGen;

/// Maximum number of inter-arrival draws per Poisson sample
pub const POISSON_CUTOFF: u64 = 100_000;

/// `min·(1 - u) + max·u`, clamped to `[min, max]` against rounding
///
/// Interpolating avoids forming `max - min`, which overflows for wide
/// intervals such as `[-1e308, 1e308]`.
pub fn uniform(gen: &mut RandomGen, min: f64, max: f64) -> f64 {
    let u = gen.next_fraction();
    (min * (1.0 - u) + max * u).max(min).min(max)
}

/// Inverse transform of the exponential CDF: `-ln(u) / λ`
pub fn exponential(gen: &mut RandomGen, lambda: f64) -> f64 {
    -gen.next_fraction().ln() / lambda
}

/// Inverse transform of the Weibull CDF: `l·(-ln u)^(1/k)`
pub fn weibull(gen: &mut RandomGen, scale: f64, shape: f64) -> f64 {
    scale * (-gen.next_fraction().ln()).powf(1.0 / shape)
}

/// Inverse transform of the Pareto CDF: `μ·(1 - u)^(-1/order)`
pub fn pareto(gen: &mut RandomGen, mu: f64, order: f64) -> f64 {
    mu * (1.0 - gen.next_fraction()).powf(-1.0 / order)
}

/// Two independent standard normal variates (Box-Muller)
pub fn standard_normal_pair(gen: &mut RandomGen) -> (f64, f64) {
    let u1 = gen.next_fraction();
    let u2 = gen.next_fraction();
    let radius = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * PI * u2;
    (radius * theta.cos(), radius * theta.sin())
}

/// Number of exponential(λ) inter-arrivals that fit in the unit interval
///
/// Capped at [`POISSON_CUTOFF`]; the cutoff itself is returned when reached.
pub fn poisson(gen: &mut RandomGen, lambda: f64) -> u64 {
    let mut elapsed = 0.0;
    let mut count = 0u64;
    loop {
        elapsed += exponential(gen, lambda);
        if elapsed > 1.0 {
            return count;
        }
        count += 1;
        if count >= POISSON_CUTOFF {
            warn!(lambda, cutoff = POISSON_CUTOFF, "poisson sample hit iteration cutoff");
            return POISSON_CUTOFF;
        }
    }
}
