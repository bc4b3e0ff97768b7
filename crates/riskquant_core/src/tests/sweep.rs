//! Tests for sensitivity sweeps
//!
//! These tests verify that:
//! - The zero-delta point reproduces an unperturbed run exactly
//! - Expected loss is monotonic in the financial base
//! - Factor-targeted sweeps shift the score distribution
//! - Unknown parameter names are rejected

use crate::analysis::{DEFAULT_DELTAS_PCT, sweep};
use crate::config::ScenarioBuilder;
use crate::error::{EngineError, InvalidParameterError};
use crate::model::RiskScenario;
use crate::simulation::run_seeded;

fn roi_scenario() -> RiskScenario {
    ScenarioBuilder::new("ROI sensitivity")
        .category("Financial")
        .likelihood_uniform(2.0, 4.0)
        .impact_uniform(4.0, 5.0)
        .financial_base(250_000.0)
        .default_multiplier()
        .build()
        .unwrap()
}

#[test]
fn test_zero_delta_matches_unperturbed_run() {
    let scenario = roi_scenario();

    let points = sweep(&scenario, "financial_base", &[0.0], 2000, Some(7)).unwrap();
    let baseline = run_seeded(&scenario, 2000, 7).unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].delta_pct, 0.0);
    assert_eq!(points[0].result, baseline);
}

#[test]
fn test_expected_loss_monotonic_in_financial_base() {
    let scenario = roi_scenario();

    let points = sweep(
        &scenario,
        "financial_base",
        &DEFAULT_DELTAS_PCT,
        2000,
        Some(42),
    )
    .unwrap();

    assert_eq!(points.len(), DEFAULT_DELTAS_PCT.len());
    let deltas: Vec<f64> = points.iter().map(|p| p.delta_pct).collect();
    assert_eq!(deltas, DEFAULT_DELTAS_PCT);

    for window in points.windows(2) {
        assert!(
            window[0].result.expected_loss <= window[1].result.expected_loss,
            "expected loss must not decrease as the base grows: {} -> {}",
            window[0].result.expected_loss,
            window[1].result.expected_loss
        );
    }
}

#[test]
fn test_factor_sweep_shifts_scores() {
    let scenario = roi_scenario();

    let points = sweep(&scenario, "impact", &[0.0, 10.0], 2000, Some(11)).unwrap();

    let p50_base = points[0].result.score_percentile(50).unwrap();
    let p50_up = points[1].result.score_percentile(50).unwrap();
    assert!(
        p50_up > p50_base,
        "scaling impact up must raise the median score ({p50_base} -> {p50_up})"
    );
}

#[test]
fn test_unknown_parameter_rejected() {
    let scenario = roi_scenario();

    let err = sweep(&scenario, "frobnicate", &[0.0], 100, Some(1)).unwrap_err();
    match err {
        EngineError::Parameter(InvalidParameterError::UnknownSweepParameter(name)) => {
            assert_eq!(name, "frobnicate");
        }
        other => panic!("expected UnknownSweepParameter, got {other:?}"),
    }
}

#[test]
fn test_sweep_with_zero_trials_rejected() {
    let scenario = roi_scenario();
    let err = sweep(&scenario, "financial_base", &[0.0], 0, Some(1)).unwrap_err();
    assert!(matches!(err, EngineError::Parameter(_)));
}
