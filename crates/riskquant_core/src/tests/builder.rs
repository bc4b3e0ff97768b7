//! Tests for the scenario builder DSL

use crate::config::ScenarioBuilder;
use crate::error::EngineError;
use crate::model::{Distribution, ScenarioId, factor_names};

#[test]
fn test_builder_assembles_scenario() {
    let scenario = ScenarioBuilder::new("Vendor breach")
        .id(3)
        .category("Third party")
        .likelihood_weighted(&[1.0, 3.0, 5.0], &[0.5, 0.3, 0.2])
        .impact_uniform(3.0, 5.0)
        .financial_base(750_000.0)
        .default_multiplier()
        .build()
        .unwrap();

    assert_eq!(scenario.scenario_id, ScenarioId(3));
    assert_eq!(scenario.name, "Vendor breach");
    assert_eq!(scenario.category, "Third party");
    assert_eq!(scenario.financial_base, 750_000.0);
    assert_eq!(scenario.factors.len(), 3);
    assert!(scenario.has_factor(factor_names::LIKELIHOOD));
    assert!(scenario.has_factor(factor_names::IMPACT));

    let multiplier = scenario.factor(factor_names::FINANCIAL_MULTIPLIER).unwrap();
    assert_eq!(
        multiplier.distribution,
        Distribution::Normal {
            mean: 1.0,
            std_dev: 0.2
        }
    );
}

#[test]
fn test_builder_requires_likelihood_and_impact() {
    let err = ScenarioBuilder::new("Empty")
        .financial_base(1000.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, EngineError::MissingFactor(_)));

    let err = ScenarioBuilder::new("No impact")
        .likelihood_uniform(1.0, 5.0)
        .build()
        .unwrap_err();
    match err {
        EngineError::MissingFactor(e) => assert_eq!(e.factor, "impact"),
        other => panic!("expected MissingFactor, got {other:?}"),
    }
}

#[test]
fn test_builder_replaces_same_named_factor() {
    let scenario = ScenarioBuilder::new("Refined")
        .likelihood_uniform(1.0, 5.0)
        .impact_uniform(1.0, 5.0)
        .impact_uniform(4.0, 5.0)
        .build()
        .unwrap();

    assert_eq!(scenario.factors.len(), 2);
    assert_eq!(
        scenario.factor(factor_names::IMPACT).unwrap().distribution,
        Distribution::Uniform { min: 4.0, max: 5.0 }
    );
}

#[test]
fn test_builder_rejects_bad_distribution() {
    let err = ScenarioBuilder::new("Inverted")
        .likelihood_uniform(4.0, 2.0)
        .impact_uniform(1.0, 5.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, EngineError::Distribution(_)));
}
