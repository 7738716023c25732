//! Random variables bound to a generator
//!
//! [`RandomVar`] pairs a [`Distribution`] parameter record with the
//! generator it draws from and whatever per-instance state its kind needs:
//! the cached second value of a normal pair, or the cursor of a
//! deterministic sequence.
//!
//! Simulation code that wants to accept its own samplers as well can work
//! against the [`RandomVariable`] trait instead.

pub mod deterministic;
pub mod distribution;
pub mod sampling;

use std::fmt;
use std::rc::Rc;

pub use deterministic::{load_values, read_values};
pub use distribution::Distribution;
pub use sampling::POISSON_CUTOFF;

use crate::error::RandomVarError;
use crate::rng::GenHandle;

/// Capability shared by every sampler
pub trait RandomVariable {
    /// Draw one variate
    fn get(&mut self) -> f64;

    /// Upper bound of the support, `None` when it cannot be computed
    fn maximum(&self) -> Option<f64>;

    /// Lower bound of the support, `None` when it cannot be computed
    fn minimum(&self) -> Option<f64>;

    /// Name used in error messages
    fn name(&self) -> &str;

    /// Upper bound, or `MaxNotComputable`
    fn try_maximum(&self) -> Result<f64, RandomVarError> {
        self.maximum()
            .ok_or_else(|| RandomVarError::MaxNotComputable {
                var: self.name().to_string(),
            })
    }

    /// Lower bound, or `MaxNotComputable`
    fn try_minimum(&self) -> Result<f64, RandomVarError> {
        self.minimum()
            .ok_or_else(|| RandomVarError::MaxNotComputable {
                var: self.name().to_string(),
            })
    }
}

/// A distribution bound to the generator it draws from
///
/// Cloning shares the generator handle and copies parameters and sampling
/// state, so a clone replays exactly what the original would draw from the
/// same generator state.
///
/// # Example
/// ```
/// use sim_randvar::rng::{new_handle, RandomGen};
/// use sim_randvar::{Distribution, RandomVar};
///
/// let gen = new_handle(RandomGen::new(12345).unwrap());
/// let mut var = RandomVar::new(gen, Distribution::Uniform { min: 0.0, max: 10.0 }).unwrap();
///
/// let x = var.get();
/// assert!((0.0..=10.0).contains(&x));
/// assert_eq!(var.minimum(), Some(0.0));
/// assert_eq!(var.maximum(), Some(10.0));
/// ```
#[derive(Debug, Clone)]
pub struct RandomVar {
    gen: GenHandle,
    dist: Distribution,
    min: Option<f64>,
    max: Option<f64>,
    /// Second value of the last normal pair
    cached: Option<f64>,
    /// Next position in a deterministic sequence
    cursor: usize,
}

impl RandomVar {
    /// Bind `dist` to `gen` after checking its parameters
    pub fn new(gen: GenHandle, dist: Distribution) -> Result<Self, RandomVarError> {
        dist.validate()?;
        Ok(Self {
            min: dist.minimum(),
            max: dist.maximum(),
            gen,
            dist,
            cached: None,
            cursor: 0,
        })
    }

    /// Draw one variate
    pub fn get(&mut self) -> f64 {
        match &self.dist {
            Distribution::Constant { value } => *value,
            Distribution::Uniform { min, max } => {
                sampling::uniform(&mut self.gen.borrow_mut(), *min, *max)
            }
            Distribution::Exponential { lambda } => {
                sampling::exponential(&mut self.gen.borrow_mut(), *lambda)
            }
            Distribution::Weibull { scale, shape } => {
                sampling::weibull(&mut self.gen.borrow_mut(), *scale, *shape)
            }
            Distribution::Pareto { mu, order } => {
                sampling::pareto(&mut self.gen.borrow_mut(), *mu, *order)
            }
            Distribution::Normal { mean, std_dev } => {
                if let Some(value) = self.cached.take() {
                    return value;
                }
                let (z0, z1) = sampling::standard_normal_pair(&mut self.gen.borrow_mut());
                self.cached = Some(*mean + *std_dev * z1);
                *mean + *std_dev * z0
            }
            Distribution::Poisson { lambda } => {
                sampling::poisson(&mut self.gen.borrow_mut(), *lambda) as f64
            }
            Distribution::Deterministic { values } => {
                let value = values[self.cursor];
                self.cursor = (self.cursor + 1) % values.len();
                value
            }
        }
    }

    /// Draw `n` variates
    pub fn sample_n(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.get()).collect()
    }

    /// Upper bound of the support, `None` when it cannot be computed
    pub fn maximum(&self) -> Option<f64> {
        self.max
    }

    /// Lower bound of the support, `None` when it cannot be computed
    pub fn minimum(&self) -> Option<f64> {
        self.min
    }

    /// Registry tag of the underlying distribution
    pub fn name(&self) -> &'static str {
        self.dist.name()
    }

    /// Parameter record
    pub fn distribution(&self) -> &Distribution {
        &self.dist
    }

    /// Generator this variable draws from
    pub fn generator(&self) -> &GenHandle {
        &self.gen
    }

    /// True if both variables draw from the same generator
    pub fn shares_generator(&self, other: &RandomVar) -> bool {
        Rc::ptr_eq(&self.gen, &other.gen)
    }

    /// Copy with identical parameters and state, drawing from the same generator
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Copy with identical parameters and state, drawing from `gen`
    pub fn rebind(&self, gen: GenHandle) -> Self {
        Self {
            gen,
            ..self.clone()
        }
    }
}

impl RandomVariable for RandomVar {
    fn get(&mut self) -> f64 {
        RandomVar::get(self)
    }

    fn maximum(&self) -> Option<f64> {
        self.max
    }

    fn minimum(&self) -> Option<f64> {
        self.min
    }

    fn name(&self) -> &str {
        self.dist.name()
    }
}

impl fmt::Display for RandomVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dist, f)
    }
}
