// ABOUTME: Domain constants for glycemic evaluation and nutrition data loading
// ABOUTME: Default GI/GL thresholds, serving-size formats, and CSV column names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default glycemic thresholds
///
/// A value exactly at a threshold belongs to the safer category.
pub mod thresholds {
    /// GL at or below this value is safe
    pub const SAFE_GL: f64 = 10.0;
    /// GL above `SAFE_GL` and at or below this value is caution; above is unsafe
    pub const CAUTION_GL: f64 = 20.0;
    /// GI at or below this value is safe
    pub const SAFE_GI: f64 = 55.0;
    /// GI above `SAFE_GI` and at or below this value is caution; above is unsafe
    pub const CAUTION_GI: f64 = 70.0;
    /// Upper bound of the glycemic index scale
    pub const MAX_GLYCEMIC_INDEX: f64 = 100.0;
}

/// Serving-size handling
pub mod serving {
    /// Serving size used when the caller does not supply one
    pub const DEFAULT_SERVING: &str = "100g";
    /// Macronutrients in the data source are expressed per this many grams
    pub const REFERENCE_GRAMS: f64 = 100.0;
    /// Serving-size strings accepted by the parser, shown to users on error
    pub const ACCEPTED_FORMATS: &[&str] = &["100g", "100 g", "1 serving", "2.5 servings"];
}

/// Column names of the tabular nutrition data source
pub mod columns {
    /// Food name
    pub const NAME: &str = "name";
    /// Glycemic index (0-100)
    pub const GLYCEMIC_INDEX: &str = "glycemic_index";
    /// Carbohydrates per 100g
    pub const CARBOHYDRATES: &str = "carbohydrates";
    /// Fiber per 100g
    pub const FIBER: &str = "fiber";
    /// Protein per 100g
    pub const PROTEIN: &str = "protein";
    /// Fat per 100g
    pub const FAT: &str = "fat";
    /// Processing level tag
    pub const PROCESSING_LEVEL: &str = "processing_level";
    /// Grams in one base serving
    pub const SERVING_SIZE_GRAMS: &str = "serving_size_grams";

    /// Every column the data source must provide, in canonical order
    pub const REQUIRED: &[&str] = &[
        NAME,
        GLYCEMIC_INDEX,
        CARBOHYDRATES,
        FIBER,
        PROTEIN,
        FAT,
        PROCESSING_LEVEL,
        SERVING_SIZE_GRAMS,
    ];
}
