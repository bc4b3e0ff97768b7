//! Quantitative risk simulation engine
//!
//! This crate provides the Monte Carlo engine behind GRC risk dashboards:
//! it turns a qualitative risk description (likelihood range, impact range,
//! financial estimate) into a probabilistic loss distribution and
//! decision-relevant statistics. It supports:
//! - Uniform, discrete-weighted, and normal factor distributions
//! - A likelihood x impact loss model with a financial multiplier
//! - Seeded, bit-reproducible simulation runs
//! - Percentile summaries (P5/P25/P50/P75/P95/P99) and level tallies
//! - Fixed-threshold risk and maturity classifiers
//! - Sensitivity sweeps over a named scenario input
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic scenario setup:
//!
//! ```ignore
//! use riskquant_core::ScenarioBuilder;
//! use riskquant_core::simulation::run;
//!
//! let scenario = ScenarioBuilder::new("Ransomware outage")
//!     .category("Cyber")
//!     .likelihood_uniform(2.0, 4.0)
//!     .impact_uniform(4.0, 5.0)
//!     .financial_base(500_000.0)
//!     .default_multiplier()
//!     .build()?;
//!
//! let result = run(&scenario, 10_000, Some(42))?;
//! println!("expected loss: {:.0}", result.expected_loss);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod classify;
pub mod error;
pub mod loss;
pub mod simulation;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use classify::{MaturityBand, RiskLevel};
pub use config::ScenarioBuilder;
pub use error::EngineError;
pub use model::{Distribution, RiskFactor, RiskScenario, ScenarioId, SimulationResult};
pub use simulation::{TRIAL_COUNT_PRESETS, run, run_seeded};
