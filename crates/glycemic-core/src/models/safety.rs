// ABOUTME: Safety classification models for single-food glycemic evaluation
// ABOUTME: SafetyLabel ordering, GlycemicDimension, and the SafetyAssessment result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Blood-sugar safety label
///
/// Variants are declared in ascending severity so `Ord` gives
/// `Safe < Caution < Unsafe` and the overall label is a plain `max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLabel {
    /// Low expected blood-sugar impact
    Safe,
    /// Moderate impact; portion control advised
    Caution,
    /// High impact
    Unsafe,
}

impl SafetyLabel {
    /// Lowercase label text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Unsafe => "unsafe",
        }
    }
}

impl fmt::Display for SafetyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dimension a threshold proposition is evaluated over
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GlycemicDimension {
    /// Glycemic load of the serving
    GlycemicLoad,
    /// Glycemic index of the food
    GlycemicIndex,
}

impl GlycemicDimension {
    /// Human-readable name, lowercase
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::GlycemicLoad => "glycemic load",
            Self::GlycemicIndex => "glycemic index",
        }
    }
}

/// Result of evaluating one food at one serving size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SafetyAssessment {
    /// Overall label: the most severe of the per-dimension categories
    pub label: SafetyLabel,
    /// Values, categories, and thresholds for both GL and GI
    pub explanation: String,
}
