// ABOUTME: Configuration error types for threshold and data source settings
// ABOUTME: Defines error variants for invalid ranges, parse failures, and unreadable files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use std::path::PathBuf;

use glycemic_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds are not ordered (e.g., safe GL not below caution GL)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Threshold file could not be read
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Threshold file is not valid JSON for the expected shape
    #[error("Invalid threshold JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                ErrorCode::ConfigInvalid
            }
            ConfigError::Parse(_) | ConfigError::Io { .. } | ConfigError::Json(_) => {
                ErrorCode::ConfigError
            }
        };
        let message = error.to_string();
        match error {
            ConfigError::Io { path, source } => AppError::new(code, message)
                .with_resource_id(path.display().to_string())
                .with_source(source),
            ConfigError::Json(source) => AppError::new(code, message).with_source(source),
            _ => AppError::new(code, message),
        }
    }
}
