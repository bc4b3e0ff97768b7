//! Reduction of raw trial vectors into a statistical summary.

use crate::classify::RiskLevel;
use crate::model::{LevelCounts, REPORTED_PERCENTILES, SimulationResult, TrialBatch};

/// Percentile by linear interpolation between order statistics: the value
/// at position `rank / 100 * (n - 1)` in the sorted sample.
///
/// `sorted` must be ascending and non-empty.
pub(crate) fn percentile(sorted: &[f64], rank: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = rank / 100.0 * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn percentile_pairs(values: &[f64]) -> Vec<(u8, f64)> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    REPORTED_PERCENTILES
        .iter()
        .map(|&rank| (rank, percentile(&sorted, rank as f64)))
        .collect()
}

/// Reduce a trial batch to its reported statistics.
///
/// Handles the degenerate single-trial batch (every percentile equals the
/// one observed value). An empty batch yields an all-zero result; the
/// runner never produces one since `trial_count` is validated positive.
#[must_use]
pub fn summarize(batch: &TrialBatch) -> SimulationResult {
    let trial_count = batch.len();
    if trial_count == 0 {
        return SimulationResult {
            expected_loss: 0.0,
            percentiles: Vec::new(),
            risk_score_distribution: Vec::new(),
            level_counts: LevelCounts::default(),
            trial_count: 0,
        };
    }

    let expected_loss = batch.financial_losses.iter().sum::<f64>() / trial_count as f64;

    let mut level_counts = LevelCounts::default();
    for &score in &batch.risk_scores {
        level_counts.record(RiskLevel::from_score(score));
    }

    SimulationResult {
        expected_loss,
        percentiles: percentile_pairs(&batch.financial_losses),
        risk_score_distribution: percentile_pairs(&batch.risk_scores),
        level_counts,
        trial_count,
    }
}
