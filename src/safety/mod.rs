// ABOUTME: Food safety classification from glycemic index and glycemic load
// ABOUTME: Threshold rules, label priority resolution, and the RuleEngine entry point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Glycemic Safety Rules
//!
//! Two independent proposition groups, one over glycemic load and one over
//! glycemic index, each yield a [`SafetyLabel`]. The overall label is the most
//! severe of the two (`unsafe > caution > safe`), so a single unsafe dimension
//! always decides the outcome. Every explanation reports both dimensions.
//!
//! | Dimension | Safe     | Caution        | Unsafe |
//! |-----------|----------|----------------|--------|
//! | GL        | ≤ 10     | (10, 20]       | > 20   |
//! | GI        | ≤ 55     | (55, 70]       | > 70   |

mod engine;
mod rules;

pub use engine::{EngineError, FoodEvaluation, RuleEngine, RuleEngineBuilder};
pub use glycemic_core::models::{SafetyAssessment, SafetyLabel};
pub use rules::{
    build_explanation, categorize, format_exceeding, format_quantity, gi_category, gl_category,
    resolve_label, RuleOutcome,
};
