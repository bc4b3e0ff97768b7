//! Monte Carlo simulation runner.
//!
//! One run draws a full batch of samples per factor, zips the columns into
//! per-trial tuples, pushes each through the loss model, and hands the
//! resulting trial vectors to the summarizer. Everything is synchronous and
//! stateless between invocations; each call owns its own RNG and
//! [`TrialBatch`], so concurrent callers never share mutable state.

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{EngineError, InvalidParameterError, MissingFactorError};
use crate::loss;
use crate::model::{RiskScenario, SimulationResult, TrialBatch, factor_names};
use crate::stats::summarize;

/// Trial counts offered by the source dashboards. Any positive count is
/// valid; these are conventional UI presets.
pub const TRIAL_COUNT_PRESETS: [usize; 4] = [1000, 5000, 10_000, 50_000];

/// Run a simulation, drawing a seed from entropy when none is supplied.
///
/// The resolved seed is logged at debug level so any run can be reproduced
/// with [`run_seeded`].
pub fn run(
    scenario: &RiskScenario,
    trial_count: usize,
    seed: Option<u64>,
) -> Result<SimulationResult, EngineError> {
    let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
    run_seeded(scenario, trial_count, seed)
}

/// Deterministic entry point: the same scenario, trial count, and seed
/// produce a bit-identical [`SimulationResult`].
pub fn run_seeded(
    scenario: &RiskScenario,
    trial_count: usize,
    seed: u64,
) -> Result<SimulationResult, EngineError> {
    if trial_count == 0 {
        return Err(InvalidParameterError::ZeroTrialCount.into());
    }
    scenario.validate()?;

    debug!(
        scenario = %scenario.name,
        trial_count,
        seed,
        "starting simulation run"
    );

    let mut rng = SmallRng::seed_from_u64(seed);

    // One batch per factor, in declaration order. The order in which
    // factors consume entropy is part of the deterministic contract.
    let mut columns: FxHashMap<&str, Vec<f64>> = FxHashMap::default();
    for factor in &scenario.factors {
        let samples = factor.distribution.sample_batch(&mut rng, trial_count)?;
        columns.entry(factor.name.as_str()).or_insert(samples);
    }

    let likelihood = columns
        .get(factor_names::LIKELIHOOD)
        .ok_or_else(|| MissingFactorError::new(factor_names::LIKELIHOOD))?;
    let impact = columns
        .get(factor_names::IMPACT)
        .ok_or_else(|| MissingFactorError::new(factor_names::IMPACT))?;
    let multiplier = columns.get(factor_names::FINANCIAL_MULTIPLIER);

    let mut batch = TrialBatch::with_capacity(trial_count);
    for i in 0..trial_count {
        let m = multiplier.map_or(1.0, |col| col[i]);
        batch.push(loss::evaluate(
            likelihood[i],
            impact[i],
            m,
            scenario.financial_base,
        ));
    }

    let result = summarize(&batch);
    debug!(
        scenario = %scenario.name,
        expected_loss = result.expected_loss,
        "simulation run complete"
    );
    Ok(result)
}
