//! Stochastic risk factor definitions and batch sampling.
//!
//! A factor names one latent input to the loss model (likelihood, impact,
//! financial multiplier) and carries the distribution it is drawn from.
//! Sampling is generic over any [`rand::Rng`] so callers control seeding.

use rand::Rng;
use rand::distr::Distribution as _;
use rand::distr::weighted::WeightedIndex;
use serde::{Deserialize, Serialize};

use crate::error::InvalidDistributionError;

/// Tolerance when checking that discrete weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Factor names with meaning to the loss model.
pub mod factor_names {
    pub const LIKELIHOOD: &str = "likelihood";
    pub const IMPACT: &str = "impact";
    pub const FINANCIAL_MULTIPLIER: &str = "financial_multiplier";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Distribution {
    /// Uniform draw over the closed interval `[min, max]`.
    Uniform { min: f64, max: f64 },
    /// Categorical draw: `values[i]` with probability `weights[i]`.
    /// Weights must sum to 1 within [`WEIGHT_SUM_TOLERANCE`].
    DiscreteWeighted { values: Vec<f64>, weights: Vec<f64> },
    /// Normal draw. Samples are never truncated here; callers that need
    /// bounded draws (e.g. ratings in 1-5) use `Uniform` or
    /// `DiscreteWeighted` instead.
    Normal { mean: f64, std_dev: f64 },
}

impl Distribution {
    /// Check the parameters without consuming entropy.
    pub fn validate(&self) -> Result<(), InvalidDistributionError> {
        match self {
            Distribution::Uniform { min, max } => {
                // `!(min <= max)` also rejects NaN bounds
                if !(min <= max) || !min.is_finite() || !max.is_finite() {
                    return Err(InvalidDistributionError::InvertedRange {
                        min: *min,
                        max: *max,
                    });
                }
                Ok(())
            }
            Distribution::DiscreteWeighted { values, weights } => {
                if values.is_empty() {
                    return Err(InvalidDistributionError::EmptySupport);
                }
                if values.len() != weights.len() {
                    return Err(InvalidDistributionError::WeightCountMismatch {
                        values: values.len(),
                        weights: weights.len(),
                    });
                }
                for &w in weights {
                    if !w.is_finite() || w < 0.0 {
                        return Err(InvalidDistributionError::InvalidWeight { weight: w });
                    }
                }
                let sum: f64 = weights.iter().sum();
                if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                    return Err(InvalidDistributionError::WeightSumMismatch { sum });
                }
                Ok(())
            }
            Distribution::Normal { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() || *std_dev < 0.0 {
                    return Err(InvalidDistributionError::InvalidNormal {
                        mean: *mean,
                        std_dev: *std_dev,
                    });
                }
                Ok(())
            }
        }
    }

    /// Draw `count` independent samples in one batch.
    ///
    /// One batch per factor (rather than one draw per trial) is the
    /// required discipline for large trial counts; see
    /// [`crate::simulation::run`].
    pub fn sample_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<f64>, InvalidDistributionError> {
        self.validate()?;
        match self {
            Distribution::Uniform { min, max } => {
                let dist = rand::distr::Uniform::new_inclusive(*min, *max).map_err(|_| {
                    InvalidDistributionError::InvertedRange {
                        min: *min,
                        max: *max,
                    }
                })?;
                Ok((0..count).map(|_| dist.sample(rng)).collect())
            }
            Distribution::DiscreteWeighted { values, weights } => {
                let index = WeightedIndex::new(weights.iter().copied()).map_err(|_| {
                    InvalidDistributionError::WeightSumMismatch {
                        sum: weights.iter().sum(),
                    }
                })?;
                Ok((0..count).map(|_| values[index.sample(rng)]).collect())
            }
            Distribution::Normal { mean, std_dev } => {
                let dist = rand_distr::Normal::new(*mean, *std_dev).map_err(|_| {
                    InvalidDistributionError::InvalidNormal {
                        mean: *mean,
                        std_dev: *std_dev,
                    }
                })?;
                Ok((0..count).map(|_| dist.sample(rng)).collect())
            }
        }
    }

    /// Scale the location parameters by a multiplier, leaving spread shape
    /// untouched. Used by sensitivity sweeps to build scenario variants.
    pub(crate) fn scale_location(&mut self, scale: f64) {
        match self {
            Distribution::Uniform { min, max } => {
                *min *= scale;
                *max *= scale;
            }
            Distribution::DiscreteWeighted { values, .. } => {
                for v in values.iter_mut() {
                    *v *= scale;
                }
            }
            Distribution::Normal { mean, .. } => {
                *mean *= scale;
            }
        }
    }
}

/// One stochastic input to the loss model.
///
/// Immutable for the duration of a simulation run; constructed once per
/// scenario definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub distribution: Distribution,
}

impl RiskFactor {
    pub fn new(name: impl Into<String>, distribution: Distribution) -> Self {
        Self {
            name: name.into(),
            distribution,
        }
    }

    /// The Normal(1.0, 0.2) financial multiplier used by the source
    /// dashboards.
    #[must_use]
    pub fn default_multiplier() -> Self {
        Self::new(
            factor_names::FINANCIAL_MULTIPLIER,
            Distribution::Normal {
                mean: 1.0,
                std_dev: 0.2,
            },
        )
    }

    pub fn validate(&self) -> Result<(), InvalidDistributionError> {
        self.distribution.validate()
    }
}
