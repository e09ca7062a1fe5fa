// ABOUTME: Integration tests for the glycemic safety rule engine
// ABOUTME: Covers labels, boundaries, priority resolution, explanations, and error propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use std::sync::Arc;
use std::thread;

use common::fixture_knowledge_base;
use glycemic_guard::config::ThresholdConfig;
use glycemic_guard::errors::NutritionError;
use glycemic_guard::knowledge_base::{FeatureSource, KnowledgeBase};
use glycemic_guard::models::{NutritionFeatures, ProcessingLevel, SafetyLabel};
use glycemic_guard::safety::{gi_category, gl_category, EngineError, RuleEngine};

fn default_engine() -> (Arc<KnowledgeBase>, RuleEngine) {
    let kb = Arc::new(fixture_knowledge_base());
    let engine = RuleEngine::with_defaults(kb.clone());
    (kb, engine)
}

fn features(glycemic_index: f64, glycemic_load: f64) -> NutritionFeatures {
    NutritionFeatures {
        glycemic_index,
        glycemic_load,
        carbohydrates: 0.0,
        fiber: 0.0,
        protein: 0.0,
        fat: 0.0,
        processing_level: ProcessingLevel::Whole,
        serving_size_grams: 100.0,
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_rice_100g_is_unsafe() {
    let (_, engine) = default_engine();
    let assessment = engine.evaluate("rice", "100g").unwrap();

    assert_eq!(assessment.label, SafetyLabel::Unsafe);
    assert!(assessment.explanation.contains("20.44"));
    assert!(assessment.explanation.contains("73.0"));
}

#[test]
fn test_apple_100g_is_safe() {
    let (_, engine) = default_engine();
    let assessment = engine.evaluate("apple", "100g").unwrap();

    assert_eq!(assessment.label, SafetyLabel::Safe);
    assert_eq!(
        assessment.explanation,
        "Glycemic load 5.04 within safe range (≤10.0). \
         Glycemic index 36.0 within safe range (≤55.0). Overall: safe."
    );
}

#[test]
fn test_unknown_food_propagates() {
    let (_, engine) = default_engine();
    let err = engine.evaluate("unknown food", "100g").unwrap_err();
    assert_eq!(err, NutritionError::food_not_found("unknown food"));
}

#[test]
fn test_invalid_serving_and_missing_data_propagate() {
    let (kb, engine) = default_engine();

    let err = engine.evaluate("apple", "abc").unwrap_err();
    assert_eq!(err, kb.nutrition_features("apple", "abc").unwrap_err());

    let err = engine.evaluate("kale leafy green raw", "100g").unwrap_err();
    assert!(matches!(err, NutritionError::MissingData { .. }));
}

#[test]
fn test_serving_changes_label() {
    let (_, engine) = default_engine();
    // cabbage GL per 100g is 1.2, so the label stays safe across sizes
    assert_eq!(
        engine
            .evaluate("cabbage cruciferous boiled", "5 servings")
            .unwrap()
            .label,
        SafetyLabel::Safe
    );
    // banana GI 51 is safe; GL at one 118g serving is 13.72
    let banana = engine.evaluate("banana ripe raw", "1 serving").unwrap();
    assert_eq!(banana.label, SafetyLabel::Caution);
    assert!(banana
        .explanation
        .ends_with("Overall: caution (determined by glycemic load)."));
    assert_eq!(
        engine.evaluate("banana ripe raw", "40g").unwrap().label,
        SafetyLabel::Safe
    );
}

#[test]
fn test_explanation_shows_value_just_over_caution() {
    let csv = format!(
        "{}\nnear threshold,50,40.004,1.0,1.0,1.0,processed,100\n",
        common::HEADER
    );
    let kb = Arc::new(KnowledgeBase::from_reader(csv.as_bytes(), "near-threshold").unwrap());
    let engine = RuleEngine::with_defaults(kb);

    let assessment = engine.evaluate("near threshold", "100g").unwrap();
    assert_eq!(assessment.label, SafetyLabel::Unsafe);
    assert!(
        assessment
            .explanation
            .starts_with("Glycemic load 20.002 exceeds caution threshold (20.0)"),
        "{}",
        assessment.explanation
    );
}

#[test]
fn test_evaluate_default_matches_100g() {
    let (_, engine) = default_engine();
    assert_eq!(
        engine.evaluate_default("arborio rice boiled").unwrap(),
        engine.evaluate("arborio rice boiled", "100g").unwrap()
    );
}

#[test]
fn test_detailed_evaluation_exposes_outcomes() {
    let (kb, engine) = default_engine();
    let evaluation = engine.evaluate_detailed("arborio rice boiled", "100g").unwrap();

    assert_eq!(
        evaluation.features,
        kb.nutrition_features("arborio rice boiled", "100g").unwrap()
    );
    assert_eq!(evaluation.glycemic_index.category, SafetyLabel::Unsafe);
    assert_eq!(evaluation.glycemic_load.category, SafetyLabel::Unsafe);
    assert_eq!(evaluation.assessment.label, SafetyLabel::Unsafe);

    let json = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(json["assessment"]["label"], "unsafe");
    assert_eq!(json["glycemic_load"]["dimension"], "glycemic_load");
}

// ============================================================================
// Boundaries and priority
// ============================================================================

#[test]
fn test_boundary_values_fall_on_safer_side() {
    let (_, engine) = default_engine();
    assert_eq!(engine.assess(&features(40.0, 10.0)).label, SafetyLabel::Safe);
    assert_eq!(engine.assess(&features(40.0, 20.0)).label, SafetyLabel::Caution);
    assert_eq!(engine.assess(&features(55.0, 1.0)).label, SafetyLabel::Safe);
    assert_eq!(engine.assess(&features(70.0, 1.0)).label, SafetyLabel::Caution);
}

#[test]
fn test_label_is_max_of_dimensions() {
    let (_, engine) = default_engine();
    let thresholds = *engine.thresholds();

    for gi in [0.0, 30.0, 55.0, 55.5, 62.0, 70.0, 71.0, 100.0] {
        for gl in [0.0, 5.0, 10.0, 10.5, 15.0, 20.0, 20.44, 45.0] {
            let assessment = engine.assess(&features(gi, gl));
            let expected = gl_category(gl, &thresholds).max(gi_category(gi, &thresholds));
            assert_eq!(assessment.label, expected, "gi={gi} gl={gl}");
            assert!(assessment.explanation.contains("Glycemic load"));
            assert!(assessment.explanation.contains("Glycemic index"));
        }
    }
}

#[test]
fn test_single_unsafe_dimension_dominates() {
    let (_, engine) = default_engine();
    let assessment = engine.assess(&features(95.0, 0.5));
    assert_eq!(assessment.label, SafetyLabel::Unsafe);
    assert!(assessment
        .explanation
        .ends_with("Overall: unsafe (determined by glycemic index)."));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_custom_thresholds() {
    let kb = Arc::new(fixture_knowledge_base());
    let strict = ThresholdConfig {
        safe_gl: 4.0,
        caution_gl: 5.0,
        safe_gi: 30.0,
        caution_gi: 40.0,
    };
    let engine = RuleEngine::new(kb, strict).unwrap();

    // apple: GL 5.04, GI 36
    let assessment = engine.evaluate("apple", "100g").unwrap();
    assert_eq!(assessment.label, SafetyLabel::Unsafe);
    assert!(assessment
        .explanation
        .contains("Glycemic load 5.04 exceeds caution threshold (5.0); unsafe range (>5.0)."));
    assert!(assessment
        .explanation
        .contains("Glycemic index 36.0 exceeds safe threshold (30.0); within caution range (≤40.0)."));
}

#[test]
fn test_invalid_thresholds_rejected() {
    let kb = Arc::new(fixture_knowledge_base());
    let inverted = ThresholdConfig {
        safe_gi: 80.0,
        ..ThresholdConfig::default()
    };
    assert!(matches!(
        RuleEngine::new(kb, inverted),
        Err(EngineError::InvalidThresholds(_))
    ));
}

#[test]
fn test_builder_without_source_is_contract_violation() {
    let err = RuleEngine::builder()
        .thresholds(ThresholdConfig::default())
        .build()
        .unwrap_err();
    assert!(matches!(err, EngineError::ContractViolation(_)));
}

#[test]
fn test_engine_accepts_any_feature_source() {
    struct ConstantSource;

    impl FeatureSource for ConstantSource {
        fn nutrition_features(
            &self,
            _food_name: &str,
            _serving_size: &str,
        ) -> Result<NutritionFeatures, NutritionError> {
            Ok(features(60.0, 12.0))
        }
    }

    let engine = RuleEngine::builder()
        .source(Arc::new(ConstantSource))
        .build()
        .unwrap();
    let assessment = engine.evaluate("anything", "whatever").unwrap();
    assert_eq!(assessment.label, SafetyLabel::Caution);
    assert!(assessment
        .explanation
        .ends_with("Overall: caution (determined by glycemic load and glycemic index)."));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_parallel_evaluations_are_identical() {
    let (_, engine) = default_engine();
    let engine = Arc::new(engine);
    let expected = engine.evaluate("banana ripe raw", "2 servings").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.evaluate("banana ripe raw", "2 servings").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
