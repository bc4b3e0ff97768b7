//! Sensitivity analysis module.
//!
//! Re-runs the simulation under parametrized perturbations of one scenario
//! input to produce a response curve, e.g. expected loss as a function of
//! a ±20% change in the financial baseline.
//!
//! ```ignore
//! use riskquant_core::analysis::{DEFAULT_DELTAS_PCT, sweep};
//!
//! let points = sweep(&scenario, "financial_base", &DEFAULT_DELTAS_PCT, 10_000, Some(42))?;
//! for point in &points {
//!     println!("{:+.0}% -> {:.0}", point.delta_pct, point.result.expected_loss);
//! }
//! ```
//!
//! Every point is an independent simulation sharing the same resolved seed,
//! so the zero-delta point reproduces an unperturbed run exactly. Points
//! run in parallel under the `parallel` feature; each is also a natural
//! unit of cancellable work for callers managing long sweeps.

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
