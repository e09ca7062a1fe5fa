// ABOUTME: Glycemic threshold configuration for the safety rule engine
// ABOUTME: GI/GL category boundaries with JSON loading and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use glycemic_core::constants::thresholds::{
    CAUTION_GI, CAUTION_GL, MAX_GLYCEMIC_INDEX, SAFE_GI, SAFE_GL,
};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Category boundaries for glycemic load and glycemic index
///
/// For each dimension: `value <= safe` is safe, `value <= caution` is caution,
/// anything above is unsafe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Highest glycemic load still considered safe
    pub safe_gl: f64,
    /// Highest glycemic load still considered caution
    pub caution_gl: f64,
    /// Highest glycemic index still considered safe
    pub safe_gi: f64,
    /// Highest glycemic index still considered caution
    pub caution_gi: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            safe_gl: SAFE_GL,
            caution_gl: CAUTION_GL,
            safe_gi: SAFE_GI,
            caution_gi: CAUTION_GI,
        }
    }
}

impl ThresholdConfig {
    /// Parse thresholds from a JSON object; absent keys keep their defaults
    ///
    /// The result is one configuration layer and is not validated here; call
    /// [`ThresholdConfig::validate`] once every layer has been applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read thresholds from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise see
    /// [`ThresholdConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validate threshold values and ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for negative, non-finite, or
    /// above-scale values and `ConfigError::InvalidRange` if a safe threshold
    /// is not strictly below its caution threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [self.safe_gl, self.caution_gl, self.safe_gi, self.caution_gi];
        if all.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "thresholds must be finite and non-negative",
            ));
        }
        if self.caution_gi > MAX_GLYCEMIC_INDEX {
            return Err(ConfigError::ValueOutOfRange(
                "glycemic index thresholds must not exceed 100",
            ));
        }
        if self.safe_gl >= self.caution_gl {
            return Err(ConfigError::InvalidRange("safe_gl must be < caution_gl"));
        }
        if self.safe_gi >= self.caution_gi {
            return Err(ConfigError::InvalidRange("safe_gi must be < caution_gi"));
        }
        Ok(())
    }
}
