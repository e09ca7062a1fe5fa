// ABOUTME: Query error taxonomy for nutrition feature retrieval
// ABOUTME: Unknown food, unparseable serving size, and missing macronutrient data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::json;
use thiserror::Error;

use super::{AppError, ErrorCode};
use crate::constants::serving::ACCEPTED_FORMATS;

/// Errors returned by a nutrition feature query
///
/// Each variant carries the context an end user needs to correct the request.
/// The rule engine passes these through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutritionError {
    /// No food matches the requested name after normalization
    #[error("Food '{food_name}' not found in nutrition knowledge base")]
    FoodNotFound {
        /// Name as supplied by the caller
        food_name: String,
    },

    /// Serving-size string matches neither the gram nor the serving-multiple grammar
    #[error(
        "Invalid serving size '{input}': expected a positive amount such as {}",
        format_accepted()
    )]
    InvalidServingSize {
        /// The offending serving-size string
        input: String,
    },

    /// The stored record lacks fields needed to compute the requested features
    #[error("Food '{food_name}' is missing nutrition data: {}", .fields.join(", "))]
    MissingData {
        /// Normalized food name
        food_name: String,
        /// Names of the absent fields
        fields: Vec<String>,
    },
}

fn format_accepted() -> String {
    ACCEPTED_FORMATS
        .iter()
        .map(|format| format!("\"{format}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

impl NutritionError {
    /// Build a not-found error for the given name
    pub fn food_not_found(food_name: impl Into<String>) -> Self {
        Self::FoodNotFound {
            food_name: food_name.into(),
        }
    }

    /// Build an invalid-serving error for the given input
    pub fn invalid_serving(input: impl Into<String>) -> Self {
        Self::InvalidServingSize {
            input: input.into(),
        }
    }

    /// Serving-size formats the parser accepts
    #[must_use]
    pub const fn accepted_formats() -> &'static [&'static str] {
        ACCEPTED_FORMATS
    }

    /// Standard error code for this failure kind
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::FoodNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::InvalidServingSize { .. } => ErrorCode::InvalidFormat,
            Self::MissingData { .. } => ErrorCode::MissingRequiredField,
        }
    }
}

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        match error {
            NutritionError::FoodNotFound { food_name } => AppError::new(code, message)
                .with_details(json!({ "food_name": &food_name }))
                .with_resource_id(food_name),
            NutritionError::InvalidServingSize { input } => AppError::new(code, message)
                .with_details(json!({ "input": input, "accepted_formats": ACCEPTED_FORMATS })),
            NutritionError::MissingData { food_name, fields } => AppError::new(code, message)
                .with_details(json!({ "food_name": &food_name, "missing_fields": fields }))
                .with_resource_id(food_name),
        }
    }
}
