// ABOUTME: Main library entry point for the glycemic food safety advisor
// ABOUTME: Nutrition knowledge base lookup and GI/GL rule evaluation for single foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy.
#![deny(unsafe_code)]

//! # Glycemic Guard
//!
//! Looks up nutrition facts for a food at a serving size and classifies the
//! blood-sugar risk of eating that serving from its glycemic index (GI) and
//! glycemic load (GL).
//!
//! ## Architecture
//!
//! - **`knowledge_base`**: immutable name-keyed nutrition table loaded once from
//!   CSV, serving-size parsing, and glycemic load computation
//! - **`safety`**: threshold rules over GI and GL with most-severe-wins label
//!   resolution and an explanation for every decision
//! - **`config`**: thresholds and data source settings from defaults, a JSON
//!   file, and environment variables
//! - **`logging`**: `tracing` subscriber setup
//!
//! Shared types live in the `glycemic-core` crate and are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use glycemic_guard::knowledge_base::KnowledgeBase;
//! use glycemic_guard::safety::RuleEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let kb = Arc::new(KnowledgeBase::from_path("data/nutrition_data.csv")?);
//! let engine = RuleEngine::with_defaults(kb);
//!
//! let assessment = engine.evaluate("white rice boiled", "1 serving")?;
//! println!("{}: {}", assessment.label, assessment.explanation);
//! # Ok(())
//! # }
//! ```

/// Threshold and data source configuration
pub mod config;

/// Nutrition knowledge base and feature queries
pub mod knowledge_base;

/// Structured logging setup
pub mod logging;

/// Glycemic safety rules and the rule engine
pub mod safety;

pub use glycemic_core::{constants, errors, models};
