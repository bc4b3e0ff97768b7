use crate::error::EngineError;
use crate::model::{Distribution, RiskFactor, RiskScenario, ScenarioId, factor_names};

/// Builder for risk scenarios with name-based factor replacement.
///
/// Setting a factor with the same name as an earlier one replaces it, so
/// presets can be refined without duplicate entries. `build` validates the
/// assembled scenario before handing it out.
pub struct ScenarioBuilder {
    scenario_id: ScenarioId,
    name: String,
    category: String,
    financial_base: f64,
    factors: Vec<RiskFactor>,
}

impl ScenarioBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scenario_id: ScenarioId(0),
            name: name.into(),
            category: String::new(),
            financial_base: 0.0,
            factors: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(mut self, id: u32) -> Self {
        self.scenario_id = ScenarioId(id);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Baseline dollar value the financial multiplier scales.
    #[must_use]
    pub fn financial_base(mut self, value: f64) -> Self {
        self.financial_base = value;
        self
    }

    /// Add a factor, replacing any earlier factor with the same name.
    #[must_use]
    pub fn factor(mut self, factor: RiskFactor) -> Self {
        if let Some(existing) = self.factors.iter_mut().find(|f| f.name == factor.name) {
            *existing = factor;
        } else {
            self.factors.push(factor);
        }
        self
    }

    // =========================================================================
    // Named-factor conveniences
    // =========================================================================

    #[must_use]
    pub fn likelihood_uniform(self, min: f64, max: f64) -> Self {
        self.factor(RiskFactor::new(
            factor_names::LIKELIHOOD,
            Distribution::Uniform { min, max },
        ))
    }

    #[must_use]
    pub fn likelihood_weighted(self, values: &[f64], weights: &[f64]) -> Self {
        self.factor(RiskFactor::new(
            factor_names::LIKELIHOOD,
            Distribution::DiscreteWeighted {
                values: values.to_vec(),
                weights: weights.to_vec(),
            },
        ))
    }

    #[must_use]
    pub fn impact_uniform(self, min: f64, max: f64) -> Self {
        self.factor(RiskFactor::new(
            factor_names::IMPACT,
            Distribution::Uniform { min, max },
        ))
    }

    #[must_use]
    pub fn impact_weighted(self, values: &[f64], weights: &[f64]) -> Self {
        self.factor(RiskFactor::new(
            factor_names::IMPACT,
            Distribution::DiscreteWeighted {
                values: values.to_vec(),
                weights: weights.to_vec(),
            },
        ))
    }

    #[must_use]
    pub fn multiplier_normal(self, mean: f64, std_dev: f64) -> Self {
        self.factor(RiskFactor::new(
            factor_names::FINANCIAL_MULTIPLIER,
            Distribution::Normal { mean, std_dev },
        ))
    }

    /// The source's Normal(1.0, 0.2) financial multiplier.
    #[must_use]
    pub fn default_multiplier(self) -> Self {
        self.factor(RiskFactor::default_multiplier())
    }

    /// Validate and assemble the scenario.
    pub fn build(self) -> Result<RiskScenario, EngineError> {
        let scenario = RiskScenario {
            scenario_id: self.scenario_id,
            name: self.name,
            category: self.category,
            factors: self.factors,
            financial_base: self.financial_base,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}
