// ABOUTME: Core types and constants for the glycemic safety advisor
// ABOUTME: Foundation crate with error handling, nutrition models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Glycemic Core
//!
//! Foundation crate providing shared types and constants for glycemic food
//! safety evaluation. It holds no I/O and no logic beyond value validation, so
//! it changes infrequently and keeps incremental builds of the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified `AppError` with `ErrorCode`, plus the `NutritionError` query taxonomy
//! - **models**: Food records, per-serving nutrition features, and safety assessments
//! - **constants**: Default thresholds, serving formats, and data source column names

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition and safety data models
pub mod models;

/// Domain constants organized by concern
pub mod constants;
