// ABOUTME: Load-time error types for the nutrition knowledge base
// ABOUTME: Fatal failures reading, parsing, or validating the tabular data source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use std::path::PathBuf;

use glycemic_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while constructing a `KnowledgeBase`
///
/// Any of these aborts construction; no partially loaded table is ever returned.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The data file could not be opened
    #[error("Failed to open nutrition data at {}: {source}", .path.display())]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The CSV reader rejected the input
    #[error("Malformed nutrition data: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header
    #[error("Nutrition data is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// The header names a column this schema does not define
    #[error("Nutrition data has unexpected column '{0}'")]
    UnknownColumn(String),

    /// The header names the same column more than once
    #[error("Nutrition data repeats column '{0}'")]
    DuplicateColumn(String),

    /// A data row failed validation
    #[error("Invalid nutrition data on line {line}: {reason}")]
    InvalidRow {
        /// 1-based line number in the source
        line: u64,
        /// What was wrong with the row
        reason: String,
    },

    /// A record supplied in memory failed validation
    #[error("Invalid nutrition record '{name}': {reason}")]
    InvalidRecord {
        /// Normalized name of the record
        name: String,
        /// What was wrong with the record
        reason: String,
    },

    /// The source contained no header or no food rows
    #[error("Nutrition data source '{0}' contains no foods")]
    EmptyDataSource(String),
}

impl From<DataLoadError> for AppError {
    fn from(error: DataLoadError) -> Self {
        let message = error.to_string();
        match error {
            DataLoadError::Io { path, source } => AppError::new(ErrorCode::StorageError, message)
                .with_resource_id(path.display().to_string())
                .with_source(source),
            DataLoadError::Csv(source) => {
                AppError::new(ErrorCode::StorageError, message).with_source(source)
            }
            DataLoadError::MissingColumn(_)
            | DataLoadError::UnknownColumn(_)
            | DataLoadError::DuplicateColumn(_)
            | DataLoadError::InvalidRow { .. }
            | DataLoadError::InvalidRecord { .. }
            | DataLoadError::EmptyDataSource(_) => AppError::new(ErrorCode::StorageError, message),
        }
    }
}
