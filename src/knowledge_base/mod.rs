// ABOUTME: In-memory nutrition knowledge base loaded once from a CSV data source
// ABOUTME: Name normalization, serving-size scaling, and glycemic load computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Knowledge Base
//!
//! Owns an immutable, name-keyed table of foods and answers feature queries
//! for a food at a requested serving size. The table is built once at
//! construction and never mutated, so a `KnowledgeBase` can be shared across
//! threads (for example behind an `Arc`) without locking.
//!
//! # Glycemic Load
//!
//! `GL = GI × carbohydrates_in_serving / 100`, where carbohydrates are scaled
//! from the per-100g value to the resolved serving.
//!
//! # Example
//!
//! ```rust,no_run
//! use glycemic_guard::knowledge_base::KnowledgeBase;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let kb = KnowledgeBase::from_path("data/nutrition_data.csv")?;
//! let features = kb.nutrition_features("apple raw", "2 servings")?;
//! println!("GL for two servings: {:.2}", features.glycemic_load);
//! # Ok(())
//! # }
//! ```

mod error;
mod loader;
mod serving;

pub use error::DataLoadError;
pub use serving::ServingRequest;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use glycemic_core::constants::serving::{DEFAULT_SERVING, REFERENCE_GRAMS};
use glycemic_core::errors::NutritionError;
use glycemic_core::models::{FoodRecord, NutritionFeatures};
use tracing::{debug, info, warn};

/// Capability to produce nutrition features for a food and serving size
///
/// This is the only thing the rule engine needs from a knowledge base.
pub trait FeatureSource: Send + Sync {
    /// Return nutrition features for `food_name` at `serving_size`
    ///
    /// # Errors
    ///
    /// Returns `NutritionError` when the food is unknown, the serving string is
    /// invalid, or the stored record lacks required data.
    fn nutrition_features(
        &self,
        food_name: &str,
        serving_size: &str,
    ) -> Result<NutritionFeatures, NutritionError>;
}

/// Normalize a food name for lookup
///
/// Lowercases, trims, and collapses internal whitespace runs to one space.
#[must_use]
pub fn normalize_food_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Glycemic load of a serving
#[must_use]
pub fn glycemic_load(glycemic_index: f64, carbohydrates_in_serving: f64) -> f64 {
    glycemic_index * carbohydrates_in_serving / 100.0
}

/// Immutable nutrition table keyed by normalized food name
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    foods: BTreeMap<String, FoodRecord>,
    source: String,
}

impl KnowledgeBase {
    /// Load the knowledge base from a CSV file
    ///
    /// The file handle is closed before this returns, whether loading succeeds or not.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` if the file cannot be opened or any row is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Load the knowledge base from any CSV stream
    ///
    /// `source_label` identifies the stream in logs and errors.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` if the header is invalid, any row is malformed,
    /// or the stream holds no foods.
    pub fn from_reader<R: Read>(reader: R, source_label: &str) -> Result<Self, DataLoadError> {
        let table = loader::load_foods(reader, source_label)?;

        for name in &table.duplicates {
            warn!(food = %name, source = %source_label, "Skipping duplicate food row");
        }
        info!(
            source = %source_label,
            rows = table.rows,
            foods = table.foods.len(),
            duplicates = table.duplicates.len(),
            "Nutrition knowledge base loaded"
        );

        Ok(Self {
            foods: table.foods,
            source: source_label.to_owned(),
        })
    }

    /// Build a knowledge base from in-memory records
    ///
    /// Names are normalized and every record is checked against the same rules
    /// as a CSV row; later records with a duplicate name are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError::InvalidRecord` for the first record that breaks
    /// a table invariant, or `EmptyDataSource` if no records are given.
    pub fn from_records(
        records: impl IntoIterator<Item = FoodRecord>,
    ) -> Result<Self, DataLoadError> {
        const SOURCE: &str = "in-memory";

        let mut foods = BTreeMap::new();
        for mut record in records {
            record.name = normalize_food_name(&record.name);
            loader::validate_record(&record).map_err(|reason| DataLoadError::InvalidRecord {
                name: record.name.clone(),
                reason,
            })?;
            foods.entry(record.name.clone()).or_insert(record);
        }
        if foods.is_empty() {
            return Err(DataLoadError::EmptyDataSource(SOURCE.to_owned()));
        }

        Ok(Self {
            foods,
            source: SOURCE.to_owned(),
        })
    }

    /// Nutrition features at the default serving size (100g)
    ///
    /// # Errors
    ///
    /// See [`KnowledgeBase::nutrition_features`].
    pub fn default_nutrition_features(
        &self,
        food_name: &str,
    ) -> Result<NutritionFeatures, NutritionError> {
        self.nutrition_features(food_name, DEFAULT_SERVING)
    }

    /// Nutrition features for a food at the requested serving size
    ///
    /// # Errors
    ///
    /// - `FoodNotFound` if no food matches the normalized name
    /// - `InvalidServingSize` if the serving string is not an accepted format or
    ///   does not resolve to a finite, positive number of grams
    /// - `MissingData` if the record lacks a macronutrient
    pub fn nutrition_features(
        &self,
        food_name: &str,
        serving_size: &str,
    ) -> Result<NutritionFeatures, NutritionError> {
        let record = self
            .food(food_name)
            .ok_or_else(|| NutritionError::food_not_found(food_name))?;
        let serving = ServingRequest::parse(serving_size)?;
        let serving_size_grams = serving.resolve_grams(record.base_serving_grams);
        if !serving_size_grams.is_finite() || serving_size_grams <= 0.0 {
            return Err(NutritionError::invalid_serving(serving_size));
        }

        let macros = &record.macronutrients_per_100g;
        let (Some(carbohydrates), Some(fiber), Some(protein), Some(fat)) = (
            macros.carbohydrates,
            macros.fiber,
            macros.protein,
            macros.fat,
        ) else {
            return Err(NutritionError::MissingData {
                food_name: record.name.clone(),
                fields: macros
                    .missing_fields()
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            });
        };

        let scale = serving_size_grams / REFERENCE_GRAMS;
        let carbohydrates = carbohydrates * scale;
        let features = NutritionFeatures {
            glycemic_index: record.glycemic_index,
            glycemic_load: glycemic_load(record.glycemic_index, carbohydrates),
            carbohydrates,
            fiber: fiber * scale,
            protein: protein * scale,
            fat: fat * scale,
            processing_level: record.processing_level,
            serving_size_grams,
        };
        if !features.glycemic_load.is_finite() {
            return Err(NutritionError::invalid_serving(serving_size));
        }

        debug!(
            food = %record.name,
            serving = %serving,
            grams = serving_size_grams,
            gi = features.glycemic_index,
            gl = features.glycemic_load,
            "Computed nutrition features"
        );
        Ok(features)
    }

    /// Borrow the record for a food, if present
    #[must_use]
    pub fn food(&self, food_name: &str) -> Option<&FoodRecord> {
        self.foods.get(&normalize_food_name(food_name))
    }

    /// Whether a food exists under the normalized name
    #[must_use]
    pub fn contains(&self, food_name: &str) -> bool {
        self.food(food_name).is_some()
    }

    /// All normalized food names, sorted
    #[must_use]
    pub fn list_all_foods(&self) -> Vec<String> {
        self.foods.keys().cloned().collect()
    }

    /// Owned copy of the full table
    ///
    /// Mutating the returned map has no effect on the knowledge base.
    #[must_use]
    pub fn all_foods(&self) -> BTreeMap<String, FoodRecord> {
        self.foods.clone()
    }

    /// Number of distinct foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Label of the data source the table was loaded from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FeatureSource for KnowledgeBase {
    fn nutrition_features(
        &self,
        food_name: &str,
        serving_size: &str,
    ) -> Result<NutritionFeatures, NutritionError> {
        Self::nutrition_features(self, food_name, serving_size)
    }
}
