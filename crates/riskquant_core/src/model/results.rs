//! Simulation outputs
//!
//! Contains the ephemeral per-run trial vectors and the immutable
//! statistical summary handed back to callers.

use serde::{Deserialize, Serialize};

use crate::classify::RiskLevel;
use crate::loss::TrialOutcome;

/// Percentile ranks reported for every simulation.
pub const REPORTED_PERCENTILES: [u8; 6] = [5, 25, 50, 75, 95, 99];

/// Raw per-trial outputs for one simulation run.
///
/// Owned exclusively by the runner and discarded after summarization, so
/// large trial counts never outlive the call that produced them.
#[derive(Debug, Default)]
pub struct TrialBatch {
    /// likelihood x impact per trial
    pub risk_scores: Vec<f64>,
    pub financial_losses: Vec<f64>,
}

impl TrialBatch {
    #[must_use]
    pub fn with_capacity(trial_count: usize) -> Self {
        Self {
            risk_scores: Vec::with_capacity(trial_count),
            financial_losses: Vec::with_capacity(trial_count),
        }
    }

    pub fn push(&mut self, outcome: TrialOutcome) {
        self.risk_scores.push(outcome.risk_score);
        self.financial_losses.push(outcome.financial_loss);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.risk_scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.risk_scores.is_empty()
    }
}

/// Trial tallies per risk level bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl LevelCounts {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Critical => self.critical += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    #[must_use]
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    /// Total trials tallied; equals the run's trial count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Statistical summary of one simulation run, immutable once produced.
///
/// Percentile lists are `(rank, value)` pairs in ascending rank order, one
/// entry per rank in [`REPORTED_PERCENTILES`]. The shape serializes to a
/// plain structured record for report/export collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Mean of the financial losses across all trials
    pub expected_loss: f64,
    /// Financial loss percentiles
    pub percentiles: Vec<(u8, f64)>,
    /// Risk score percentiles
    pub risk_score_distribution: Vec<(u8, f64)>,
    pub level_counts: LevelCounts,
    pub trial_count: usize,
}

impl SimulationResult {
    /// Financial loss at a reported percentile rank.
    #[must_use]
    pub fn loss_percentile(&self, rank: u8) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|(r, _)| *r == rank)
            .map(|(_, v)| *v)
    }

    /// Risk score at a reported percentile rank.
    #[must_use]
    pub fn score_percentile(&self, rank: u8) -> Option<f64> {
        self.risk_score_distribution
            .iter()
            .find(|(r, _)| *r == rank)
            .map(|(_, v)| *v)
    }

    /// Risk level of the median simulated score.
    #[must_use]
    pub fn median_level(&self) -> Option<RiskLevel> {
        self.score_percentile(50).map(RiskLevel::from_score)
    }
}
