//! Score-to-level classification presets.
//!
//! The source dashboards reused the same classifier concept on two
//! differently scaled metrics, each with its own fixed threshold table:
//! likelihood x impact scores (native range 1-25) and percentage metrics
//! (compliance, maturity, 0-100). Both tables live here so thresholds
//! cannot drift between call sites. Callers pick the type matching their
//! metric's scale.
//!
//! All band boundaries are inclusive on the upper band (`>=`, never `>`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal risk level for likelihood x impact scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify a risk score on the 1-25 product scale.
    ///
    /// Total over all reals: scores below 6 (including negatives and NaN)
    /// are `Low`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 20.0 {
            RiskLevel::Critical
        } else if score >= 12.0 {
            RiskLevel::High
        } else if score >= 6.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal band for percentage-scale metrics (compliance %, maturity %).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityBand {
    Initial,
    Basic,
    Intermediate,
    Advanced,
    Optimized,
}

impl MaturityBand {
    /// Classify a 0-100 percentage metric.
    #[must_use]
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            MaturityBand::Optimized
        } else if pct >= 60.0 {
            MaturityBand::Advanced
        } else if pct >= 40.0 {
            MaturityBand::Intermediate
        } else if pct >= 20.0 {
            MaturityBand::Basic
        } else {
            MaturityBand::Initial
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityBand::Initial => "initial",
            MaturityBand::Basic => "basic",
            MaturityBand::Intermediate => "intermediate",
            MaturityBand::Advanced => "advanced",
            MaturityBand::Optimized => "optimized",
        }
    }
}

impl fmt::Display for MaturityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
