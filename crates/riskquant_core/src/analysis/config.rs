//! Sweep targets and result points for sensitivity analysis.

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;
use crate::model::{RiskScenario, SimulationResult};

/// Named scalar input on the scenario to perturb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SweepTarget {
    /// Scale the scenario's `financial_base`.
    FinancialBase,
    /// Scale the location parameters of the named factor's distribution
    /// (uniform bounds, normal mean, discrete values).
    Factor(String),
}

impl SweepTarget {
    /// Resolve a caller-supplied parameter name against a scenario.
    pub fn resolve(name: &str, scenario: &RiskScenario) -> Result<Self, InvalidParameterError> {
        if name == "financial_base" {
            return Ok(SweepTarget::FinancialBase);
        }
        if scenario.has_factor(name) {
            return Ok(SweepTarget::Factor(name.to_string()));
        }
        Err(InvalidParameterError::UnknownSweepParameter(
            name.to_string(),
        ))
    }

    /// Build the scenario variant for one delta.
    pub(crate) fn apply(&self, base: &RiskScenario, delta_pct: f64) -> RiskScenario {
        let scale = 1.0 + delta_pct / 100.0;
        let mut variant = base.clone();
        match self {
            SweepTarget::FinancialBase => variant.financial_base *= scale,
            SweepTarget::Factor(name) => {
                if let Some(factor) = variant.factors.iter_mut().find(|f| f.name == *name) {
                    factor.distribution.scale_location(scale);
                }
            }
        }
        variant
    }
}

/// One point on a sensitivity response curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub delta_pct: f64,
    pub result: SimulationResult,
}
