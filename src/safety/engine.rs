// ABOUTME: Rule engine classifying a food serving as safe, caution, or unsafe
// ABOUTME: Fetches features from a FeatureSource and applies GI/GL threshold rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use glycemic_core::constants::serving::DEFAULT_SERVING;
use glycemic_core::errors::{AppError, ErrorCode, NutritionError};
use glycemic_core::models::{NutritionFeatures, SafetyAssessment};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::rules::{build_explanation, resolve_label, RuleOutcome};
use crate::config::{ConfigError, ThresholdConfig};
use crate::knowledge_base::FeatureSource;

/// Errors raised while constructing a `RuleEngine`
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine was built without a feature source
    #[error("Contract violation: {0}")]
    ContractViolation(&'static str),

    /// The supplied thresholds are inconsistent
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(#[from] ConfigError),
}

impl From<EngineError> for AppError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ContractViolation(_) => {
                Self::new(ErrorCode::ContractViolation, error.to_string())
            }
            EngineError::InvalidThresholds(source) => source.into(),
        }
    }
}

/// Everything the engine derived for one food and serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEvaluation {
    /// Features the decision was based on
    pub features: NutritionFeatures,
    /// Glycemic load proposition result
    pub glycemic_load: RuleOutcome,
    /// Glycemic index proposition result
    pub glycemic_index: RuleOutcome,
    /// Overall label and explanation
    pub assessment: SafetyAssessment,
}

/// Stateless classifier over features from a shared `FeatureSource`
///
/// Cloning is cheap; clones share the same source.
#[derive(Clone)]
pub struct RuleEngine {
    source: Arc<dyn FeatureSource>,
    thresholds: ThresholdConfig,
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}

impl RuleEngine {
    /// Create an engine with explicit thresholds
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidThresholds` if the thresholds fail validation
    pub fn new(
        source: Arc<dyn FeatureSource>,
        thresholds: ThresholdConfig,
    ) -> Result<Self, EngineError> {
        thresholds.validate()?;
        Ok(Self { source, thresholds })
    }

    /// Create an engine with the default GL 10/20 and GI 55/70 thresholds
    #[must_use]
    pub fn with_defaults(source: Arc<dyn FeatureSource>) -> Self {
        Self {
            source,
            thresholds: ThresholdConfig::default(),
        }
    }

    /// Start building an engine
    #[must_use]
    pub fn builder() -> RuleEngineBuilder {
        RuleEngineBuilder::default()
    }

    /// Thresholds this engine applies
    #[must_use]
    pub const fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Classify a food at a serving size
    ///
    /// # Errors
    ///
    /// Returns the feature source's `NutritionError` unchanged
    pub fn evaluate(
        &self,
        food_name: &str,
        serving_size: &str,
    ) -> Result<SafetyAssessment, NutritionError> {
        Ok(self.evaluate_detailed(food_name, serving_size)?.assessment)
    }

    /// Classify a food at the default 100g serving
    ///
    /// # Errors
    ///
    /// Returns the feature source's `NutritionError` unchanged
    pub fn evaluate_default(&self, food_name: &str) -> Result<SafetyAssessment, NutritionError> {
        self.evaluate(food_name, DEFAULT_SERVING)
    }

    /// Classify a food and return the features and per-dimension outcomes as well
    ///
    /// # Errors
    ///
    /// Returns the feature source's `NutritionError` unchanged
    pub fn evaluate_detailed(
        &self,
        food_name: &str,
        serving_size: &str,
    ) -> Result<FoodEvaluation, NutritionError> {
        let features = self.source.nutrition_features(food_name, serving_size)?;
        let evaluation = self.classify(features);

        debug!(
            food = %food_name,
            grams = features.serving_size_grams,
            gi = features.glycemic_index,
            gl = features.glycemic_load,
            label = %evaluation.assessment.label,
            "Evaluated food safety"
        );
        Ok(evaluation)
    }

    /// Classify an already-computed feature set without a lookup
    #[must_use]
    pub fn assess(&self, features: &NutritionFeatures) -> SafetyAssessment {
        self.classify(*features).assessment
    }

    fn classify(&self, features: NutritionFeatures) -> FoodEvaluation {
        let glycemic_load = RuleOutcome::glycemic_load(features.glycemic_load, &self.thresholds);
        let glycemic_index =
            RuleOutcome::glycemic_index(features.glycemic_index, &self.thresholds);
        let assessment = SafetyAssessment {
            label: resolve_label(glycemic_load.category, glycemic_index.category),
            explanation: build_explanation(&glycemic_load, &glycemic_index),
        };
        FoodEvaluation {
            features,
            glycemic_load,
            glycemic_index,
            assessment,
        }
    }
}

/// Builder for `RuleEngine`
#[derive(Default)]
pub struct RuleEngineBuilder {
    source: Option<Arc<dyn FeatureSource>>,
    thresholds: ThresholdConfig,
}

impl RuleEngineBuilder {
    /// Feature source the engine will query
    #[must_use]
    pub fn source(mut self, source: Arc<dyn FeatureSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Thresholds to apply instead of the defaults
    #[must_use]
    pub fn thresholds(mut self, thresholds: ThresholdConfig) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Build the engine
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` if no feature source was supplied,
    /// or `EngineError::InvalidThresholds` if the thresholds fail validation
    pub fn build(self) -> Result<RuleEngine, EngineError> {
        let source = self.source.ok_or(EngineError::ContractViolation(
            "rule engine requires a feature source providing nutrition features",
        ))?;
        RuleEngine::new(source, self.thresholds)
    }
}
