// ABOUTME: Output formatting helpers for glycemic-cli
// ABOUTME: Renders nutrition features, safety evaluations, and errors for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use glycemic_guard::{
    errors::{AppError, AppResult},
    models::{NutritionFeatures, SafetyLabel},
    safety::{format_quantity, FoodEvaluation},
};
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
///
/// # Errors
///
/// Returns a `SerializationError` if the value cannot be rendered as JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display nutrition features for a serving
pub fn display_features(food: &str, serving: &str, features: &NutritionFeatures) {
    println!("{food} ({serving} = {} g)", format_quantity(features.serving_size_grams));
    println!("{}", "=".repeat(50));
    println!("   Glycemic index:   {}", format_quantity(features.glycemic_index));
    println!("   Glycemic load:    {}", format_quantity(features.glycemic_load));
    println!("   Carbohydrates:    {} g", format_quantity(features.carbohydrates));
    println!("   Fiber:            {} g", format_quantity(features.fiber));
    println!("   Protein:          {} g", format_quantity(features.protein));
    println!("   Fat:              {} g", format_quantity(features.fat));
    println!("   Processing level: {}", features.processing_level);
}

/// Display a safety evaluation
pub fn display_evaluation(food: &str, serving: &str, evaluation: &FoodEvaluation) {
    let label = evaluation.assessment.label;
    let marker = match label {
        SafetyLabel::Safe => "OK",
        SafetyLabel::Caution => "CAUTION",
        SafetyLabel::Unsafe => "UNSAFE",
    };
    println!("{food} ({serving}): {marker} [{label}]");
    println!("{}", "=".repeat(50));
    println!("{}", evaluation.assessment.explanation);
}

/// Display an error with its carried context
pub fn display_error(error: &AppError) {
    eprintln!("Error: {error}");
    if let Some(resource) = &error.context.resource_id {
        eprintln!("   Resource: {resource}");
    }
    if let Some(details) = error.context.details.as_object() {
        for (key, value) in details {
            eprintln!("   {key}: {value}");
        }
    }
}
