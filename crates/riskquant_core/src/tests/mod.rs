//! Integration tests for the risk simulation engine
//!
//! Tests are organized by topic:
//! - `sampling` - Factor distributions, validation, and seeded draws
//! - `classification` - Risk level and maturity band thresholds
//! - `simulation` - Runner determinism, percentiles, and the reference scenario
//! - `sweep` - Sensitivity analysis consistency and monotonicity
//! - `builder` - Scenario builder DSL

mod builder;
mod simulation;
mod sweep;
