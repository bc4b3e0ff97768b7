//! Deterministic loss model applied to each joint factor draw.
//!
//! Pure functions: identical inputs always produce identical outputs. No
//! clamping is applied anywhere - a Normal factor that strays outside its
//! nominal 1-5 band flows through unchanged, matching the source. Callers
//! that need bounded scores use `Uniform` or `DiscreteWeighted` factors.

use rustc_hash::FxHashMap;

use crate::error::MissingFactorError;
use crate::model::factor_names;

/// Outputs of a single trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// likelihood x impact, native range 1-25 for 1-5 rated factors
    pub risk_score: f64,
    /// financial_base x multiplier
    pub financial_loss: f64,
}

/// Evaluate one trial from its factor draws.
#[inline]
#[must_use]
pub fn evaluate(likelihood: f64, impact: f64, multiplier: f64, financial_base: f64) -> TrialOutcome {
    TrialOutcome {
        risk_score: likelihood * impact,
        financial_loss: financial_base * multiplier,
    }
}

/// Evaluate one trial from a named sample tuple.
///
/// The runner uses the columnar [`evaluate`] directly; this form serves
/// callers holding a single joint draw keyed by factor name. A missing
/// multiplier means the base passes through unscaled.
pub fn evaluate_tuple(
    samples: &FxHashMap<String, f64>,
    financial_base: f64,
) -> Result<TrialOutcome, MissingFactorError> {
    let likelihood = *samples
        .get(factor_names::LIKELIHOOD)
        .ok_or_else(|| MissingFactorError::new(factor_names::LIKELIHOOD))?;
    let impact = *samples
        .get(factor_names::IMPACT)
        .ok_or_else(|| MissingFactorError::new(factor_names::IMPACT))?;
    let multiplier = samples
        .get(factor_names::FINANCIAL_MULTIPLIER)
        .copied()
        .unwrap_or(1.0);
    Ok(evaluate(likelihood, impact, multiplier, financial_base))
}
