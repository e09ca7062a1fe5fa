// ABOUTME: Core data models for nutrition lookup and safety classification
// ABOUTME: Re-exports food record, feature, and assessment types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod nutrition;
mod safety;

pub use nutrition::{
    FoodRecord, MacronutrientProfile, NutritionFeatures, ProcessingLevel, UnknownProcessingLevel,
};
pub use safety::{GlycemicDimension, SafetyAssessment, SafetyLabel};
