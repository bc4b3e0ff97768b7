//! Sensitivity sweep evaluator - runs simulations with perturbed inputs.

use rand::RngCore;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::{EngineError, InvalidParameterError};
use crate::model::RiskScenario;
use crate::simulation::run_seeded;

use super::{SweepPoint, SweepTarget};

/// The ±20% sweep used by the source's ROI sensitivity view.
pub const DEFAULT_DELTAS_PCT: [f64; 5] = [-20.0, -10.0, 0.0, 10.0, 20.0];

/// Sweep a named scalar input across `deltas_pct`, running one full
/// simulation per delta.
///
/// `parameter` is either `"financial_base"` or the name of a scenario
/// factor; anything else fails with
/// [`InvalidParameterError::UnknownSweepParameter`]. Points are returned in
/// input order. Every point reuses the same resolved seed, so the
/// zero-delta point is bit-identical to [`run_seeded`] on the unperturbed
/// scenario.
pub fn sweep(
    base: &RiskScenario,
    parameter: &str,
    deltas_pct: &[f64],
    trial_count: usize,
    seed: Option<u64>,
) -> Result<Vec<SweepPoint>, EngineError> {
    if trial_count == 0 {
        return Err(InvalidParameterError::ZeroTrialCount.into());
    }
    let target = SweepTarget::resolve(parameter, base)?;
    let seed = seed.unwrap_or_else(|| rand::rng().next_u64());

    debug!(
        scenario = %base.name,
        parameter,
        points = deltas_pct.len(),
        trial_count,
        seed,
        "starting sensitivity sweep"
    );

    #[cfg(feature = "parallel")]
    let points = deltas_pct
        .par_iter()
        .map(|&delta_pct| sweep_point(base, &target, delta_pct, trial_count, seed))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let points = deltas_pct
        .iter()
        .map(|&delta_pct| sweep_point(base, &target, delta_pct, trial_count, seed))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(points)
}

fn sweep_point(
    base: &RiskScenario,
    target: &SweepTarget,
    delta_pct: f64,
    trial_count: usize,
    seed: u64,
) -> Result<SweepPoint, EngineError> {
    let variant = target.apply(base, delta_pct);
    let result = run_seeded(&variant, trial_count, seed)?;
    Ok(SweepPoint { delta_pct, result })
}
