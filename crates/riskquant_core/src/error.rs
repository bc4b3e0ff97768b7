use std::fmt;

/// Errors related to malformed factor distributions
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidDistributionError {
    /// Uniform range where `min > max` (or either bound is NaN)
    InvertedRange { min: f64, max: f64 },
    /// Discrete factor with mismatched value/weight lengths
    WeightCountMismatch { values: usize, weights: usize },
    /// Discrete weights must sum to 1 within tolerance
    WeightSumMismatch { sum: f64 },
    /// Discrete factor with no values to draw from
    EmptySupport,
    /// A discrete weight is negative or non-finite
    InvalidWeight { weight: f64 },
    /// Normal parameters must be finite with non-negative std_dev
    InvalidNormal { mean: f64, std_dev: f64 },
}

impl fmt::Display for InvalidDistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDistributionError::InvertedRange { min, max } => {
                write!(f, "uniform range is inverted (min={min}, max={max})")
            }
            InvalidDistributionError::WeightCountMismatch { values, weights } => {
                write!(f, "{values} values but {weights} weights")
            }
            InvalidDistributionError::WeightSumMismatch { sum } => {
                write!(f, "weights must sum to 1 (got {sum})")
            }
            InvalidDistributionError::EmptySupport => {
                write!(f, "discrete factor has no values")
            }
            InvalidDistributionError::InvalidWeight { weight } => {
                write!(f, "weight {weight} is not a finite non-negative number")
            }
            InvalidDistributionError::InvalidNormal { mean, std_dev } => {
                write!(
                    f,
                    "invalid normal parameters (mean={mean}, std_dev={std_dev}): std_dev must be non-negative and finite"
                )
            }
        }
    }
}

impl std::error::Error for InvalidDistributionError {}

/// Errors related to call parameters
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidParameterError {
    /// `trial_count` must be a positive integer
    ZeroTrialCount,
    /// Sweep parameter does not name `financial_base` or a scenario factor
    UnknownSweepParameter(String),
}

impl fmt::Display for InvalidParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidParameterError::ZeroTrialCount => {
                write!(f, "trial count must be a positive integer")
            }
            InvalidParameterError::UnknownSweepParameter(name) => {
                write!(f, "unknown sweep parameter {name:?}")
            }
        }
    }
}

impl std::error::Error for InvalidParameterError {}

/// A scenario lacks a factor the loss model requires
#[derive(Debug, Clone, PartialEq)]
pub struct MissingFactorError {
    pub factor: String,
}

impl MissingFactorError {
    pub fn new(factor: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
        }
    }
}

impl fmt::Display for MissingFactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scenario is missing required factor {:?}", self.factor)
    }
}

impl std::error::Error for MissingFactorError {}

/// Umbrella error for all engine entry points
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    Distribution(InvalidDistributionError),
    Parameter(InvalidParameterError),
    MissingFactor(MissingFactorError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Distribution(e) => write!(f, "{e}"),
            EngineError::Parameter(e) => write!(f, "{e}"),
            EngineError::MissingFactor(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Distribution(e) => Some(e),
            EngineError::Parameter(e) => Some(e),
            EngineError::MissingFactor(e) => Some(e),
        }
    }
}

impl From<InvalidDistributionError> for EngineError {
    fn from(e: InvalidDistributionError) -> Self {
        EngineError::Distribution(e)
    }
}

impl From<InvalidParameterError> for EngineError {
    fn from(e: InvalidParameterError) -> Self {
        EngineError::Parameter(e)
    }
}

impl From<MissingFactorError> for EngineError {
    fn from(e: MissingFactorError) -> Self {
        EngineError::MissingFactor(e)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
