//! Tests for the simulation runner
//!
//! These tests verify that:
//! - A fixed seed yields a bit-identical result across calls
//! - Reported percentiles are non-decreasing in rank
//! - A single-trial run degenerates correctly
//! - Invalid trial counts and incomplete scenarios are rejected
//! - The reference scenario lands where its parameters predict

use crate::config::ScenarioBuilder;
use crate::error::EngineError;
use crate::model::{Distribution, RiskFactor, RiskScenario, ScenarioId};
use crate::simulation::{TRIAL_COUNT_PRESETS, run, run_seeded};

/// Reference scenario: likelihood ~ U(2,4), impact ~ U(4,5),
/// base $500k, multiplier ~ Normal(1.0, 0.2)
fn reference_scenario() -> RiskScenario {
    ScenarioBuilder::new("Reference")
        .id(1)
        .category("Operational")
        .likelihood_uniform(2.0, 4.0)
        .impact_uniform(4.0, 5.0)
        .financial_base(500_000.0)
        .default_multiplier()
        .build()
        .unwrap()
}

#[test]
fn test_same_seed_is_bit_identical() {
    let scenario = reference_scenario();

    let a = run_seeded(&scenario, 5000, 42).unwrap();
    let b = run_seeded(&scenario, 5000, 42).unwrap();
    assert_eq!(a, b);

    // The Option-seed entry point must agree with the explicit one
    let c = run(&scenario, 5000, Some(42)).unwrap();
    assert_eq!(a, c);
}

#[test]
fn test_percentiles_are_ordered() {
    let scenario = reference_scenario();
    let result = run_seeded(&scenario, 2000, 7).unwrap();

    for pairs in [&result.percentiles, &result.risk_score_distribution] {
        let ranks: Vec<u8> = pairs.iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![5, 25, 50, 75, 95, 99]);
        for window in pairs.windows(2) {
            assert!(
                window[0].1 <= window[1].1,
                "percentile values must be non-decreasing: {window:?}"
            );
        }
    }
}

#[test]
fn test_single_trial_degenerates() {
    let scenario = reference_scenario();
    let result = run_seeded(&scenario, 1, 3).unwrap();

    assert_eq!(result.trial_count, 1);
    assert_eq!(result.level_counts.total(), 1);

    // All percentiles collapse to the single observed value
    let loss = result.loss_percentile(50).unwrap();
    assert!(result.percentiles.iter().all(|(_, v)| *v == loss));
    assert_eq!(result.expected_loss, loss);

    let score = result.score_percentile(50).unwrap();
    assert!(result.risk_score_distribution.iter().all(|(_, v)| *v == score));
}

#[test]
fn test_zero_trials_rejected() {
    let scenario = reference_scenario();
    let err = run_seeded(&scenario, 0, 1).unwrap_err();
    assert!(matches!(err, EngineError::Parameter(_)));
}

#[test]
fn test_missing_impact_factor_rejected() {
    let scenario = RiskScenario {
        scenario_id: ScenarioId(9),
        name: "Incomplete".to_string(),
        category: String::new(),
        factors: vec![RiskFactor::new(
            "likelihood",
            Distribution::Uniform { min: 1.0, max: 5.0 },
        )],
        financial_base: 10_000.0,
    };

    let err = run_seeded(&scenario, 100, 1).unwrap_err();
    match err {
        EngineError::MissingFactor(e) => assert_eq!(e.factor, "impact"),
        other => panic!("expected MissingFactor, got {other:?}"),
    }
}

#[test]
fn test_invalid_weights_rejected_at_build() {
    let scenario = ScenarioBuilder::new("Bad weights")
        .likelihood_weighted(&[2.0, 4.0], &[0.5, 0.4])
        .impact_uniform(4.0, 5.0)
        .financial_base(1000.0)
        .build();
    assert!(matches!(scenario, Err(EngineError::Distribution(_))));
}

#[test]
fn test_reference_scenario_statistics() {
    let scenario = reference_scenario();
    let result = run_seeded(&scenario, 10_000, 42).unwrap();

    assert_eq!(result.trial_count, 10_000);

    // Mean-1 multiplier: expected loss within 2% of the base
    let expected = 500_000.0;
    assert!(
        (result.expected_loss - expected).abs() / expected < 0.02,
        "expected loss {} too far from {expected}",
        result.expected_loss
    );

    // Median score near the product of midpoints (3 x 4.5 = 13.5)
    let p50 = result.score_percentile(50).unwrap();
    assert!((8.0..=20.0).contains(&p50), "median score {p50} out of band");
    assert_eq!(result.median_level(), Some(crate::RiskLevel::High));

    // Every trial lands in exactly one level bucket
    assert_eq!(result.level_counts.total(), 10_000);
}

#[test]
fn test_without_multiplier_base_passes_through() {
    let scenario = ScenarioBuilder::new("No multiplier")
        .likelihood_uniform(2.0, 4.0)
        .impact_uniform(4.0, 5.0)
        .financial_base(500_000.0)
        .build()
        .unwrap();

    let result = run_seeded(&scenario, 1000, 5).unwrap();

    // Unsampled base: every trial's loss is exactly the base
    assert_eq!(result.expected_loss, 500_000.0);
    assert_eq!(result.loss_percentile(5), Some(500_000.0));
    assert_eq!(result.loss_percentile(99), Some(500_000.0));
}

#[test]
fn test_result_serializes_to_plain_record() {
    let scenario = reference_scenario();
    let result = run_seeded(&scenario, 100, 42).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["expected_loss"].is_number());
    assert_eq!(json["trial_count"], 100);
    assert_eq!(json["percentiles"].as_array().unwrap().len(), 6);
    assert!(json["level_counts"]["critical"].is_number());

    let back: crate::model::SimulationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_trial_count_presets() {
    assert_eq!(TRIAL_COUNT_PRESETS, [1000, 5000, 10_000, 50_000]);
}
