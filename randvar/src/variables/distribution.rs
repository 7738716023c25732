//! Distribution parameter records
//!
//! A [`Distribution`] is pure data: the defining parameters of one kind of
//! random variable. It carries no generator and no sampling state, so it can
//! be stored in configuration, compared, printed back in parser syntax and
//! bound to any generator later (see [`RandomVar`](super::RandomVar)).

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::deterministic::{load_values, sequence_bounds};
use crate::error::RandomVarError;

/// Kinds of random variable and their parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Distribution {
    /// Always returns `value` (a Dirac delta)
    Constant { value: f64 },

    /// Uniform on `[min, max]`
    Uniform { min: f64, max: f64 },

    /// Exponential with rate `lambda` (mean `1/lambda`)
    Exponential { lambda: f64 },

    /// Weibull with scale `scale` (l) and shape `shape` (k)
    Weibull { scale: f64, shape: f64 },

    /// Pareto with scale `mu` and order (tail index) `order`
    Pareto { mu: f64, order: f64 },

    /// Normal with mean `mean` and standard deviation `std_dev`
    Normal { mean: f64, std_dev: f64 },

    /// Poisson with rate `lambda`
    Poisson { lambda: f64 },

    /// Replays `values` in order, wrapping around after the last one
    Deterministic { values: Vec<f64> },
}

impl Distribution {
    /// Registry tag of this kind
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Constant { .. } => "constant",
            Distribution::Uniform { .. } => "uniform",
            Distribution::Exponential { .. } => "exponential",
            Distribution::Weibull { .. } => "weibull",
            Distribution::Pareto { .. } => "pareto",
            Distribution::Normal { .. } => "normal",
            Distribution::Poisson { .. } => "poisson",
            Distribution::Deterministic { .. } => "deterministic",
        }
    }

    /// Deterministic sequence from a list of values
    pub fn deterministic(values: impl Into<Vec<f64>>) -> Result<Self, RandomVarError> {
        let dist = Distribution::Deterministic {
            values: values.into(),
        };
        dist.validate()?;
        Ok(dist)
    }

    /// Deterministic sequence read from a file (see [`load_values`])
    pub fn deterministic_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RandomVarError> {
        Self::deterministic(load_values(path)?)
    }

    /// Check the parameters against the domain of the distribution
    pub fn validate(&self) -> Result<(), RandomVarError> {
        let var = self.name();
        let finite = |label: &str, v: f64| -> Result<(), RandomVarError> {
            if v.is_finite() {
                Ok(())
            } else {
                Err(RandomVarError::invalid(var, format!("{} must be finite, got {}", label, v)))
            }
        };
        let positive = |label: &str, v: f64| -> Result<(), RandomVarError> {
            finite(label, v)?;
            if v > 0.0 {
                Ok(())
            } else {
                Err(RandomVarError::invalid(var, format!("{} must be positive, got {}", label, v)))
            }
        };

        match self {
            Distribution::Constant { value } => finite("value", *value),
            Distribution::Uniform { min, max } => {
                finite("min", *min)?;
                finite("max", *max)?;
                if min > max {
                    return Err(RandomVarError::invalid(
                        var,
                        format!("min {} greater than max {}", min, max),
                    ));
                }
                Ok(())
            }
            Distribution::Exponential { lambda } => positive("lambda", *lambda),
            Distribution::Weibull { scale, shape } => {
                positive("scale", *scale)?;
                positive("shape", *shape)
            }
            Distribution::Pareto { mu, order } => {
                positive("mu", *mu)?;
                positive("order", *order)
            }
            Distribution::Normal { mean, std_dev } => {
                finite("mean", *mean)?;
                finite("std_dev", *std_dev)?;
                if *std_dev < 0.0 {
                    return Err(RandomVarError::invalid(
                        var,
                        format!("std_dev must not be negative, got {}", std_dev),
                    ));
                }
                Ok(())
            }
            Distribution::Poisson { lambda } => {
                finite("lambda", *lambda)?;
                if *lambda < 0.0 {
                    return Err(RandomVarError::invalid(
                        var,
                        format!("lambda must not be negative, got {}", lambda),
                    ));
                }
                Ok(())
            }
            Distribution::Deterministic { values } => {
                if values.is_empty() {
                    return Err(RandomVarError::EmptySequence {
                        var: var.to_string(),
                    });
                }
                values.iter().try_for_each(|v| finite("value", *v))
            }
        }
    }

    /// Lower bound of the support, `None` when it cannot be computed
    pub fn minimum(&self) -> Option<f64> {
        match self {
            Distribution::Constant { value } => Some(*value),
            Distribution::Uniform { min, .. } => Some(*min),
            Distribution::Exponential { .. }
            | Distribution::Weibull { .. }
            | Distribution::Poisson { .. } => Some(0.0),
            Distribution::Pareto { .. } | Distribution::Normal { .. } => None,
            Distribution::Deterministic { values } => sequence_bounds(values).map(|(lo, _)| lo),
        }
    }

    /// Upper bound of the support, `None` when it cannot be computed
    pub fn maximum(&self) -> Option<f64> {
        match self {
            Distribution::Constant { value } => Some(*value),
            Distribution::Uniform { max, .. } => Some(*max),
            Distribution::Exponential { .. }
            | Distribution::Weibull { .. }
            | Distribution::Pareto { .. }
            | Distribution::Normal { .. }
            | Distribution::Poisson { .. } => None,
            Distribution::Deterministic { values } => sequence_bounds(values).map(|(_, hi)| hi),
        }
    }

    // ========================================================================
    // Construction from textual parameter lists
    // ========================================================================

    /// `constant(v)`
    pub fn constant_from_params(name: &str, params: &[String]) -> Result<Self, RandomVarError> {
        let [value] = numbers::<1>(name, params)?;
        Ok(Distribution::Constant { value })
    }

    /// `uniform(min, max)`
    pub fn uniform_from_params(name: &str, params: &[String]) -> Result<Self, RandomVarError> {
        let [min, max] = numbers::<2>(name, params)?;
        Ok(Distribution::Uniform { min, max })
    }

    /// `exponential(lambda)`
    pub fn exponential_from_params(name: &str, params: &[String]) -> Result<Self, RandomVarError> {
        let [lambda] = numbers::<1>(name, params)?;
        Ok(Distribution::Exponential { lambda })
    }

    /// `weibull(scale, shape)`
    pub fn weibull_from_params(name: &str, params: &[String]) -> Result<Self, RandomVarError> {
        let [scale, shape] = numbers::<2>(name, params)?;
        Ok(Distribution::Weibull { scale, shape })
    }

    /// `pareto(mu, order)`
    pub fn pareto_from_params(name: &str, params: &[String]) -> Result<Self, RandomVarError> {
        let [mu, order] = numbers::<2>(name, params)?;
        Ok(Distribution::Pareto { mu, order })
    }

    /// `normal(mean, std_dev)`
    pub fn normal_from_params(name: &str, params: &[String]) -> Result<Self, RandomVarError> {
        let [mean, std_dev] = numbers::<2>(name, params)?;
        Ok(Distribution::Normal { mean, std_dev })
    }

    /// `poisson(lambda)`
    pub fn poisson_from_params(name: &str, params: &[String]) -> Result<Self, RandomVarError> {
        let [lambda] = numbers::<1>(name, params)?;
        Ok(Distribution::Poisson { lambda })
    }

    /// `deterministic(v1, v2, ...)` or `deterministic(path)`
    ///
    /// A single parameter that is not a number names a sequence file.
    pub fn deterministic_from_params(
        name: &str,
        params: &[String],
    ) -> Result<Self, RandomVarError> {
        if params.is_empty() {
            return Err(RandomVarError::WrongArity {
                name: name.to_string(),
                expected: "at least 1".to_string(),
                found: 0,
            });
        }
        if let [single] = params {
            if single.parse::<f64>().is_err() {
                return Self::deterministic_from_file(single);
            }
        }
        let values = params
            .iter()
            .map(|p| number(name, p))
            .collect::<Result<Vec<_>, _>>()?;
        Self::deterministic(values)
    }
}

fn number(name: &str, literal: &str) -> Result<f64, RandomVarError> {
    literal
        .parse::<f64>()
        .map_err(|_| RandomVarError::MalformedLiteral {
            name: name.to_string(),
            literal: literal.to_string(),
        })
}

fn numbers<const N: usize>(name: &str, params: &[String]) -> Result<[f64; N], RandomVarError> {
    if params.len() != N {
        return Err(RandomVarError::WrongArity {
            name: name.to_string(),
            expected: N.to_string(),
            found: params.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, literal) in out.iter_mut().zip(params) {
        *slot = number(name, literal)?;
    }
    Ok(out)
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<f64> = match self {
            Distribution::Constant { value } => vec![*value],
            Distribution::Uniform { min, max } => vec![*min, *max],
            Distribution::Exponential { lambda } => vec![*lambda],
            Distribution::Weibull { scale, shape } => vec![*scale, *shape],
            Distribution::Pareto { mu, order } => vec![*mu, *order],
            Distribution::Normal { mean, std_dev } => vec![*mean, *std_dev],
            Distribution::Poisson { lambda } => vec![*lambda],
            Distribution::Deterministic { values } => values.clone(),
        };
        let joined = params
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({})", self.name(), joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_uniform_from_params() {
        let dist = Distribution::uniform_from_params("uniform", &strings(&["0", "10"])).unwrap();
        assert_eq!(dist, Distribution::Uniform { min: 0.0, max: 10.0 });
    }

    #[test]
    fn test_arity_mismatch() {
        let err = Distribution::uniform_from_params("uniform", &strings(&["1"])).unwrap_err();
        assert_eq!(
            err,
            RandomVarError::WrongArity {
                name: "uniform".to_string(),
                expected: "2".to_string(),
                found: 1,
            }
        );
    }

    #[test]
    fn test_malformed_literal() {
        let err = Distribution::exponential_from_params("exp", &strings(&["fast"])).unwrap_err();
        assert_eq!(
            err,
            RandomVarError::MalformedLiteral {
                name: "exp".to_string(),
                literal: "fast".to_string(),
            }
        );
    }

    #[test]
    fn test_validation_rejects_bad_domains() {
        assert!(Distribution::Uniform { min: 5.0, max: 1.0 }.validate().is_err());
        assert!(Distribution::Exponential { lambda: 0.0 }.validate().is_err());
        assert!(Distribution::Weibull { scale: 1.0, shape: -2.0 }.validate().is_err());
        assert!(Distribution::Normal { mean: 0.0, std_dev: -1.0 }.validate().is_err());
        assert!(Distribution::Poisson { lambda: -0.5 }.validate().is_err());
        assert!(Distribution::Constant { value: f64::NAN }.validate().is_err());
        assert!(Distribution::Deterministic { values: vec![] }.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_degenerate_but_valid() {
        assert!(Distribution::Uniform { min: 2.0, max: 2.0 }.validate().is_ok());
        assert!(Distribution::Normal { mean: 1.0, std_dev: 0.0 }.validate().is_ok());
        assert!(Distribution::Poisson { lambda: 0.0 }.validate().is_ok());
    }

    #[test]
    fn test_bounds_table() {
        let exp = Distribution::Exponential { lambda: 2.0 };
        assert_eq!(exp.minimum(), Some(0.0));
        assert_eq!(exp.maximum(), None);

        let pareto = Distribution::Pareto { mu: 1.0, order: 2.0 };
        assert_eq!(pareto.minimum(), None);
        assert_eq!(pareto.maximum(), None);

        let det = Distribution::deterministic(vec![4.0, -2.0, 9.0]).unwrap();
        assert_eq!(det.minimum(), Some(-2.0));
        assert_eq!(det.maximum(), Some(9.0));
    }

    #[test]
    fn test_display_uses_parser_syntax() {
        assert_eq!(
            Distribution::Uniform { min: 0.0, max: 10.0 }.to_string(),
            "uniform(0, 10)"
        );
        assert_eq!(
            Distribution::deterministic(vec![1.0, 2.5]).unwrap().to_string(),
            "deterministic(1, 2.5)"
        );
    }

    #[test]
    fn test_serde_externally_tagged() {
        let json = r#"{"Normal": {"mean": 5.0, "std_dev": 2.0}}"#;
        let dist: Distribution = serde_json::from_str(json).unwrap();
        assert_eq!(dist, Distribution::Normal { mean: 5.0, std_dev: 2.0 });
    }
}
