// ABOUTME: Serving-size parsing and resolution to grams
// ABOUTME: Accepts "<n>g", "<n> g", and "<n> serving(s)" with tolerant whitespace and case
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use glycemic_core::errors::NutritionError;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SERVING_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 100g, 50.5 g, 1 serving, 2.5 SERVINGS, .5g
    Regex::new(r"(?i)^\s*(\d+(?:\.\d*)?|\.\d+)\s*(g|servings?)\s*$").ok()
});

/// A caller's serving size, before it is tied to a particular food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "amount", rename_all = "snake_case")]
pub enum ServingRequest {
    /// Absolute quantity in grams
    Grams(f64),
    /// Multiple of the food's base serving
    Servings(f64),
}

impl ServingRequest {
    /// Parse a serving-size string
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::InvalidServingSize` if the string matches neither
    /// grammar or the amount is not a finite, strictly positive number.
    pub fn parse(input: &str) -> Result<Self, NutritionError> {
        let invalid = || NutritionError::invalid_serving(input);

        let captures = SERVING_PATTERN
            .as_ref()
            .and_then(|pattern| pattern.captures(input))
            .ok_or_else(invalid)?;

        let amount: f64 = captures[1].parse().map_err(|_| invalid())?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(invalid());
        }

        if captures[2].eq_ignore_ascii_case("g") {
            Ok(Self::Grams(amount))
        } else {
            Ok(Self::Servings(amount))
        }
    }

    /// Resolve to grams given the food's base serving
    #[must_use]
    pub fn resolve_grams(&self, base_serving_grams: f64) -> f64 {
        match self {
            Self::Grams(grams) => *grams,
            Self::Servings(multiple) => multiple * base_serving_grams,
        }
    }
}

impl FromStr for ServingRequest {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ServingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grams(grams) => write!(f, "{grams}g"),
            Self::Servings(multiple) if (*multiple - 1.0).abs() < f64::EPSILON => {
                f.write_str("1 serving")
            }
            Self::Servings(multiple) => write!(f, "{multiple} servings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gram_forms() {
        assert_eq!(ServingRequest::parse("100g"), Ok(ServingRequest::Grams(100.0)));
        assert_eq!(ServingRequest::parse("100 g"), Ok(ServingRequest::Grams(100.0)));
        assert_eq!(ServingRequest::parse(" 50.5G "), Ok(ServingRequest::Grams(50.5)));
        assert_eq!(ServingRequest::parse(".5g"), Ok(ServingRequest::Grams(0.5)));
    }

    #[test]
    fn test_serving_forms() {
        assert_eq!(
            ServingRequest::parse("1 serving"),
            Ok(ServingRequest::Servings(1.0))
        );
        assert_eq!(
            ServingRequest::parse("2.5 Servings"),
            Ok(ServingRequest::Servings(2.5))
        );
        assert_eq!(
            ServingRequest::parse("2servings"),
            Ok(ServingRequest::Servings(2.0))
        );
    }

    #[test]
    fn test_rejected_inputs() {
        for input in [
            "", "abc", "g", "serving", "-100g", "-1 serving", "0g", "0 servings", "1e3g",
            "100 kg", "2 cups", "100gg", "1.2.3g",
        ] {
            assert_eq!(
                ServingRequest::parse(input),
                Err(NutritionError::invalid_serving(input)),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_grams() {
        assert!((ServingRequest::Grams(250.0).resolve_grams(98.0) - 250.0).abs() < 1e-9);
        assert!((ServingRequest::Servings(2.0).resolve_grams(182.0) - 364.0).abs() < 1e-9);
        assert!((ServingRequest::Servings(0.5).resolve_grams(98.0) - 49.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(ServingRequest::Grams(100.0).to_string(), "100g");
        assert_eq!(ServingRequest::Servings(1.0).to_string(), "1 serving");
        assert_eq!(ServingRequest::Servings(2.5).to_string(), "2.5 servings");
    }
}
