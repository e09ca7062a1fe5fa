// ABOUTME: Configuration for the glycemic advisor: thresholds and nutrition data source
// ABOUTME: Layers defaults, an optional JSON threshold file, and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! Settings are resolved in this order, each layer overriding the previous:
//!
//! 1. Built-in defaults (GL 10/20, GI 55/70, `data/nutrition_data.csv`, `100g`)
//! 2. JSON threshold file, given explicitly or named by `GLYCEMIC_THRESHOLDS_FILE`
//! 3. Individual environment variables (`GLYCEMIC_SAFE_GL`, ...)
//!
//! Validation runs once, on the merged result.
//!
//! The resolved value is owned by the caller and passed explicitly to the
//! components that need it. There is no global instance.

mod error;
mod thresholds;

pub use error::ConfigError;
pub use thresholds::ThresholdConfig;

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use glycemic_core::constants::serving::DEFAULT_SERVING;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::knowledge_base::ServingRequest;

/// Environment variable naming a JSON threshold file
pub const THRESHOLDS_FILE_ENV: &str = "GLYCEMIC_THRESHOLDS_FILE";

/// Default location of the bundled nutrition table
pub const DEFAULT_DATA_PATH: &str = "data/nutrition_data.csv";

/// Where the nutrition table lives and how queries default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBaseConfig {
    /// Path to the nutrition CSV
    pub data_path: PathBuf,
    /// Serving size used when a caller does not give one
    pub default_serving: String,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_serving: DEFAULT_SERVING.to_owned(),
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlycemicConfig {
    /// Rule engine thresholds
    pub thresholds: ThresholdConfig,
    /// Knowledge base data source settings
    pub knowledge_base: KnowledgeBaseConfig,
}

impl GlycemicConfig {
    /// Load configuration from defaults, threshold file, and environment
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold file is unreadable or malformed, an
    /// environment variable does not parse, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_thresholds_file(None)
    }

    /// Load configuration, reading thresholds from `thresholds_file` when given
    ///
    /// An explicit file takes the place of `GLYCEMIC_THRESHOLDS_FILE`. Per-value
    /// environment overrides still apply on top of it, and validation runs
    /// once on the merged result.
    ///
    /// # Errors
    ///
    /// See [`GlycemicConfig::load`].
    pub fn load_with_thresholds_file(thresholds_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = thresholds_file
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(THRESHOLDS_FILE_ENV).map(PathBuf::from));
        if let Some(path) = path {
            debug!(path = %path.display(), "Loading glycemic thresholds from file");
            config.thresholds = ThresholdConfig::from_json_file(&path)?;
        }

        config = config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate thresholds and the default serving size
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        ServingRequest::parse(&self.knowledge_base.default_serving)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("GLYCEMIC_SAFE_GL", &mut self.thresholds.safe_gl)?;
        Self::apply_env_var("GLYCEMIC_CAUTION_GL", &mut self.thresholds.caution_gl)?;
        Self::apply_env_var("GLYCEMIC_SAFE_GI", &mut self.thresholds.safe_gi)?;
        Self::apply_env_var("GLYCEMIC_CAUTION_GI", &mut self.thresholds.caution_gi)?;

        Self::apply_env_var("GLYCEMIC_DATA_PATH", &mut self.knowledge_base.data_path)?;
        Self::apply_env_var(
            "GLYCEMIC_DEFAULT_SERVING",
            &mut self.knowledge_base.default_serving,
        )?;

        Ok(self)
    }
}
