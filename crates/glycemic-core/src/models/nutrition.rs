// ABOUTME: Nutrition models for food records and per-serving feature sets
// ABOUTME: FoodRecord, MacronutrientProfile, ProcessingLevel, and NutritionFeatures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How heavily a food has been processed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingLevel {
    /// Unprocessed whole food
    Whole,
    /// Minimally processed (cleaned, cut, cooked)
    MinimallyProcessed,
    /// Processed food
    Processed,
    /// Ultra-processed industrial formulation
    UltraProcessed,
}

impl ProcessingLevel {
    /// Canonical tag as stored in the data source
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::MinimallyProcessed => "minimally_processed",
            Self::Processed => "processed",
            Self::UltraProcessed => "ultra_processed",
        }
    }
}

impl fmt::Display for ProcessingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing level tag that matches no known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown processing level '{0}'")]
pub struct UnknownProcessingLevel(pub String);

impl FromStr for ProcessingLevel {
    type Err = UnknownProcessingLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase().replace(['-', ' '], "_");
        match tag.as_str() {
            "whole" => Ok(Self::Whole),
            "minimally_processed" => Ok(Self::MinimallyProcessed),
            "processed" => Ok(Self::Processed),
            "ultra_processed" => Ok(Self::UltraProcessed),
            _ => Err(UnknownProcessingLevel(s.to_owned())),
        }
    }
}

/// Macronutrient content per 100 grams of food
///
/// A field is `None` when the data source left the cell empty.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacronutrientProfile {
    /// Carbohydrates (grams per 100g)
    pub carbohydrates: Option<f64>,
    /// Dietary fiber (grams per 100g)
    pub fiber: Option<f64>,
    /// Protein (grams per 100g)
    pub protein: Option<f64>,
    /// Fat (grams per 100g)
    pub fat: Option<f64>,
}

impl MacronutrientProfile {
    /// Profile with every macronutrient present
    #[must_use]
    pub const fn complete(carbohydrates: f64, fiber: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbohydrates: Some(carbohydrates),
            fiber: Some(fiber),
            protein: Some(protein),
            fat: Some(fat),
        }
    }

    /// Names of absent fields, in data source column order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("carbohydrates", self.carbohydrates),
            ("fiber", self.fiber),
            ("protein", self.protein),
            ("fat", self.fat),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.is_none().then_some(name))
        .collect()
    }
}

/// One food in the knowledge base
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    /// Normalized name (lowercase, trimmed, single-spaced); the lookup key
    pub name: String,
    /// Glycemic index, 0-100
    pub glycemic_index: f64,
    /// Macronutrients per 100 grams
    pub macronutrients_per_100g: MacronutrientProfile,
    /// Processing level tag
    pub processing_level: ProcessingLevel,
    /// Grams in one serving of this food
    pub base_serving_grams: f64,
}

/// Nutrition features of a food at a resolved serving size
///
/// All macronutrients are scaled to `serving_size_grams`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionFeatures {
    /// Glycemic index (independent of serving size)
    pub glycemic_index: f64,
    /// Glycemic load: `glycemic_index * carbohydrates / 100`
    pub glycemic_load: f64,
    /// Carbohydrates in the serving (grams)
    pub carbohydrates: f64,
    /// Fiber in the serving (grams)
    pub fiber: f64,
    /// Protein in the serving (grams)
    pub protein: f64,
    /// Fat in the serving (grams)
    pub fat: f64,
    /// Processing level of the food
    pub processing_level: ProcessingLevel,
    /// Resolved serving size (grams)
    pub serving_size_grams: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_level_accepts_variants() {
        assert_eq!(
            "minimally-processed".parse::<ProcessingLevel>(),
            Ok(ProcessingLevel::MinimallyProcessed)
        );
        assert_eq!(
            " Ultra Processed ".parse::<ProcessingLevel>(),
            Ok(ProcessingLevel::UltraProcessed)
        );
        assert_eq!("WHOLE".parse::<ProcessingLevel>(), Ok(ProcessingLevel::Whole));
        assert!("raw".parse::<ProcessingLevel>().is_err());
    }

    #[test]
    fn test_processing_level_serializes_snake_case() {
        let json = serde_json::to_string(&ProcessingLevel::MinimallyProcessed).unwrap();
        assert_eq!(json, "\"minimally_processed\"");
    }

    #[test]
    fn test_missing_fields_in_column_order() {
        let profile = MacronutrientProfile {
            carbohydrates: Some(6.0),
            fiber: None,
            protein: Some(1.3),
            fat: None,
        };
        assert_eq!(profile.missing_fields(), vec!["fiber", "fat"]);
        assert!(MacronutrientProfile::complete(1.0, 1.0, 1.0, 1.0)
            .missing_fields()
            .is_empty());
    }
}
