//! Risk scenarios - the unit of analysis.

use serde::{Deserialize, Serialize};

use super::factor::{RiskFactor, factor_names};
use super::ids::ScenarioId;
use crate::error::{EngineError, MissingFactorError};

/// A named bundle of stochastic risk factors plus a financial baseline.
///
/// Factors are ordered; the declaration order fixes the sampling order of a
/// seeded run and is therefore part of the deterministic contract. Factor
/// names should be unique - lookups return the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScenario {
    pub scenario_id: ScenarioId,
    pub name: String,
    /// Free-text classification for grouping and reporting
    pub category: String,
    pub factors: Vec<RiskFactor>,
    /// Baseline dollar value scaled by the financial multiplier factor.
    /// Passed through unsampled when no multiplier factor is present.
    pub financial_base: f64,
}

impl RiskScenario {
    pub fn factor(&self, name: &str) -> Option<&RiskFactor> {
        self.factors.iter().find(|f| f.name == name)
    }

    pub fn has_factor(&self, name: &str) -> bool {
        self.factor(name).is_some()
    }

    /// Check that every factor is well-formed and that the loss model's
    /// required factors are present.
    pub fn validate(&self) -> Result<(), EngineError> {
        for factor in &self.factors {
            factor.validate()?;
        }
        for required in [factor_names::LIKELIHOOD, factor_names::IMPACT] {
            if !self.has_factor(required) {
                return Err(MissingFactorError::new(required).into());
            }
        }
        Ok(())
    }
}
